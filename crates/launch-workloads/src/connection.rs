use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use launch_common::error::LaunchResult;
use launch_common::info;
use launch_common::settings::{ConnectionMode, ConnectionSettings};

/// Resolve the cluster connection described by `settings`.
pub async fn load_config(settings: &ConnectionSettings) -> LaunchResult<Config> {
    let config = match settings.mode {
        ConnectionMode::Infer => Config::infer().await?,
        ConnectionMode::InCluster => Config::incluster()?,
        ConnectionMode::Kubeconfig => {
            let options = kubeconfig_options(settings);
            match &settings.kubeconfig {
                Some(path) => {
                    let kubeconfig = Kubeconfig::read_from(path)?;
                    Config::from_custom_kubeconfig(kubeconfig, &options).await?
                }
                None => Config::from_kubeconfig(&options).await?,
            }
        }
    };
    Ok(config)
}

pub async fn connect_to_cluster(settings: &ConnectionSettings) -> LaunchResult<Client> {
    info!("Connecting to cluster...");
    let config = load_config(settings).await?;
    info!("Using API server {}", config.cluster_url);
    let client = Client::try_from(config)?;
    Ok(client)
}

fn kubeconfig_options(settings: &ConnectionSettings) -> KubeConfigOptions {
    KubeConfigOptions {
        context: settings.context.clone(),
        ..Default::default()
    }
}
