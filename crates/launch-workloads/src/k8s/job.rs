use k8s_openapi::api::batch::v1::{Job, JobSpec, JobStatus};
use k8s_openapi::api::core::v1::{PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use launch_common::workload::JobDefinition;

use super::container::build_container;
use super::{Manifest, WorkloadStatus};

impl Manifest for JobDefinition {
    type Resource = Job;

    fn name(&self) -> &str {
        &self.name
    }

    fn to_resource(&self) -> Job {
        Job {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                ..Default::default()
            },
            spec: Some(JobSpec {
                // TTL is only honoured when the server has the TTL-after-finished controller
                ttl_seconds_after_finished: self.ttl_seconds_after_finished,
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(self.labels.clone()),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![build_container(&self.container)],
                        restart_policy: Some(self.restart_policy.as_str().to_string()),
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl WorkloadStatus for Job {
    type Status = JobStatus;

    fn workload_status(&self) -> Option<&JobStatus> {
        self.status.as_ref()
    }
}
