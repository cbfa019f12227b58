use launch_cli::exec;
use launch_common::error;

#[tokio::main]
async fn main() {
    match exec(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")).await {
        Ok(_) => (),
        Err(e) => error!("Error: {}", e),
    }
}
