use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec, DeploymentStatus};
use k8s_openapi::api::core::v1::{PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use launch_common::workload::DeploymentDefinition;

use super::container::build_container;
use super::{Manifest, WorkloadStatus};

impl Manifest for DeploymentDefinition {
    type Resource = Deployment;

    fn name(&self) -> &str {
        &self.name
    }

    /// `apps/v1` requires a selector, so it mirrors the pod template labels.
    fn to_resource(&self) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(self.replicas),
                selector: LabelSelector {
                    match_labels: Some(self.labels.clone()),
                    ..Default::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(self.labels.clone()),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![build_container(&self.container)],
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl WorkloadStatus for Deployment {
    type Status = DeploymentStatus;

    fn workload_status(&self) -> Option<&DeploymentStatus> {
        self.status.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deployment() {
        let deployment = DeploymentDefinition::default().to_resource();
        assert_eq!(deployment.metadata.name.as_deref(), Some("demo"));

        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(1));

        let labels = spec.template.metadata.unwrap().labels.unwrap();
        assert_eq!(labels.get("app").map(String::as_str), Some("sentence-reverser"));
        assert_eq!(spec.selector.match_labels, Some(labels));

        let containers = spec.template.spec.unwrap().containers;
        assert_eq!(containers[0].name, "sentence-reverser");
        assert_eq!(containers[0].image.as_deref(), Some("nginx:latest"));
        assert_eq!(containers[0].ports.as_ref().unwrap()[0].container_port, 80);
    }

    #[test]
    fn serializes_as_apps_v1() {
        let value = serde_json::to_value(DeploymentDefinition::default().to_resource()).unwrap();
        assert_eq!(value["apiVersion"], "apps/v1");
        assert_eq!(value["kind"], "Deployment");
    }
}
