use k8s_openapi::api::core::v1::{Pod, PodSpec, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use launch_common::workload::PodDefinition;

use super::container::build_container;
use super::{Manifest, WorkloadStatus};

impl Manifest for PodDefinition {
    type Resource = Pod;

    fn name(&self) -> &str {
        &self.name
    }

    fn to_resource(&self) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                containers: vec![build_container(&self.container)],
                restart_policy: self.restart_policy.map(|p| p.as_str().to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl WorkloadStatus for Pod {
    type Status = PodStatus;

    fn workload_status(&self) -> Option<&PodStatus> {
        self.status.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use launch_common::workload::RestartPolicy;

    use super::*;

    #[test]
    fn test_default_pod() {
        let pod = PodDefinition::default().to_resource();
        assert_eq!(pod.metadata.name.as_deref(), Some("demo"));

        let spec = pod.spec.unwrap();
        assert_eq!(spec.restart_policy.as_deref(), Some("OnFailure"));
        assert_eq!(spec.containers.len(), 1);
        assert_eq!(spec.containers[0].name, "hello-world");
        assert_eq!(spec.containers[0].image.as_deref(), Some("hello-world"));
    }

    #[test]
    fn restart_policy_is_optional() {
        let def = PodDefinition {
            restart_policy: None,
            ..Default::default()
        };
        assert!(def.to_resource().spec.unwrap().restart_policy.is_none());

        let def = PodDefinition {
            restart_policy: Some(RestartPolicy::Never),
            ..Default::default()
        };
        assert_eq!(
            def.to_resource().spec.unwrap().restart_policy.as_deref(),
            Some("Never")
        );
    }
}
