use clap::{Parser, ValueEnum};
use launch_common::settings::Settings;
use launch_workloads::Manifest;

use crate::error::LaunchCliResult;

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    #[arg(value_enum)]
    pub kind: WorkloadKind,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadKind {
    Pod,
    Deployment,
    Job,
}

pub fn render(kind: WorkloadKind, config: &Settings) -> LaunchCliResult<String> {
    let yaml = match kind {
        WorkloadKind::Pod => serde_yaml::to_string(&config.pod.to_resource())?,
        WorkloadKind::Deployment => serde_yaml::to_string(&config.deployment.to_resource())?,
        WorkloadKind::Job => serde_yaml::to_string(&config.job.to_resource())?,
    };
    Ok(yaml)
}

pub async fn run(args: RenderArgs, config: &Settings) -> LaunchCliResult<()> {
    print!("{}", render(args.kind, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::batch::v1::Job;

    use super::*;

    #[test]
    fn rendered_job_parses_back() {
        let yaml = render(WorkloadKind::Job, &Settings::default()).unwrap();
        assert!(yaml.starts_with("apiVersion: batch/v1\n"));

        let job: Job = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(job.metadata.name.as_deref(), Some("demo"));
        assert_eq!(job.spec.unwrap().ttl_seconds_after_finished, Some(10));
    }

    #[test]
    fn rendered_pod_uses_configured_image() {
        let mut settings = Settings::default();
        settings.pod.container.image = "busybox:1.36".to_string();
        let yaml = render(WorkloadKind::Pod, &settings).unwrap();
        assert!(yaml.contains("image: busybox:1.36"));
        assert!(yaml.contains("kind: Pod"));
    }
}
