use clap::Parser;
use launch_common::settings::Settings;

use crate::error::LaunchCliResult;

#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}

pub fn describe(package: &str, version: &str, config: &Settings) -> String {
    let mut lines = vec![
        format!("{} {}", package, version),
        format!("namespace: {}", config.namespace),
        format!("connection: {:?}", config.connection.mode),
    ];
    if let Some(kubeconfig) = &config.connection.kubeconfig {
        lines.push(format!("kubeconfig: {}", kubeconfig.display()));
    }
    if let Some(context) = &config.connection.context {
        lines.push(format!("context: {}", context));
    }
    lines.join("\n")
}

pub async fn run(
    _args: InfoArgs,
    package: &str,
    version: &str,
    config: &Settings,
) -> LaunchCliResult<()> {
    println!("{}", describe(package, version, config));
    Ok(())
}
