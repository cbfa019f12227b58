use std::path::PathBuf;

use clap::Parser;
use launch_common::{
    metadata::LevelFilter,
    util::tracing::{level_from_log, setup_tracing},
};

use crate::{error::LaunchCliResult, init::init_config};

mod info;
mod render;
mod workload;

#[derive(Debug, Parser)]
#[command(name = "kl", version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Log level; falls back to the settings file, then `info`
    #[clap(short('l'), long, value_name("LEVEL"), global = true)]
    pub log_level: Option<LevelFilter>,

    /// Settings file layered under `config*` files and `KL__*` variables
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Namespace to operate in
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Use the pod's service account instead of a kubeconfig
    #[arg(long, global = true, conflicts_with_all = ["kubeconfig", "context"])]
    pub in_cluster: bool,

    /// Kubeconfig file to load
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Parser, Clone)]
pub enum Command {
    #[command(about = "Show version and connection information")]
    Info(info::InfoArgs),
    #[command(about = "Create, delete or inspect the naked demo Pod")]
    Pod(workload::LifecycleArgs),
    #[command(about = "Create, delete or inspect the demo Deployment", alias = "deploy")]
    Deployment(workload::LifecycleArgs),
    #[command(about = "Create, delete or inspect the demo Job")]
    Job(workload::LifecycleArgs),
    #[command(about = "Print a workload manifest without contacting the cluster")]
    Render(render::RenderArgs),
}

/// Parse the command line and run it. `package` and `version` name the binary for `info`.
pub async fn exec(package: &'static str, version: &'static str) -> LaunchCliResult {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let cfg = match init_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            setup_tracing(cli.log_level);
            return Err(e.into());
        }
    };
    setup_tracing(Some(
        cli.log_level.unwrap_or_else(|| level_from_log(cfg.log_level)),
    ));

    match cli.cmd {
        Command::Info(args) => info::run(args, package, version, cfg).await?,
        Command::Pod(args) => workload::run(args, &cfg.pod, cfg).await?,
        Command::Deployment(args) => workload::run(args, &cfg.deployment, cfg).await?,
        Command::Job(args) => workload::run(args, &cfg.job, cfg).await?,
        Command::Render(args) => render::run(args, cfg).await?,
    }
    Ok(())
}
