use std::fmt::Debug;

use clap::Args;
use k8s_openapi::NamespaceResourceScope;
use launch_common::settings::Settings;
use launch_common::{info, warn};
use launch_workloads::{
    connection::connect_to_cluster, resolve, KubeResourceClient, Lifecycle, Manifest, Outcome,
    WorkloadStatus,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::LaunchCliResult;

#[derive(Args, Debug, Clone)]
pub struct LifecycleArgs {
    /// `--create`, `--delete` or `--status`; creates when omitted
    #[arg(value_name = "ACTION", allow_hyphen_values = true)]
    pub action: Option<String>,
}

pub async fn run<D>(args: LifecycleArgs, definition: &D, config: &Settings) -> LaunchCliResult<()>
where
    D: Manifest,
    D::Resource: k8s_openapi::Resource
        + kube::Resource<Scope = NamespaceResourceScope>
        + WorkloadStatus
        + Clone
        + DeserializeOwned
        + Serialize
        + Debug,
    <D::Resource as kube::Resource>::DynamicType: Default,
{
    let kind = <D::Resource as k8s_openapi::Resource>::KIND;
    let mut out = std::io::stdout();
    // usage needs no cluster
    let Some(action) = resolve(args.action.as_deref(), kind, &mut out)? else {
        return Ok(());
    };

    let client = connect_to_cluster(&config.connection).await?;
    info!("Using namespace {}", config.namespace);
    let lifecycle = Lifecycle::new(
        KubeResourceClient::<D::Resource>::new(client, &config.namespace),
        definition.name(),
    );

    let outcome = lifecycle.run(action, &definition.to_resource(), &mut out).await?;
    if let Outcome::Rejected(reason) = outcome {
        warn!("{} '{}' was not changed: {}", kind, definition.name(), reason);
    }
    Ok(())
}
