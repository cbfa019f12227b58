//! Builders turning workload definitions into `k8s-openapi` objects.
//!
//! Nothing in here talks to a cluster; unset optional fields are left for the
//! API server to default.
pub mod container;
pub mod deployment;
pub mod job;
pub mod pod;

use k8s_openapi::NamespaceResourceScope;
use serde::Serialize;

/// A definition that can be rendered into the Kubernetes object it describes.
pub trait Manifest {
    type Resource: kube::Resource<Scope = NamespaceResourceScope>;

    fn name(&self) -> &str;

    fn to_resource(&self) -> Self::Resource;
}

/// Access to the `status` sub-object of a workload.
pub trait WorkloadStatus {
    type Status: Serialize;

    fn workload_status(&self) -> Option<&Self::Status>;
}
