pub mod client;
pub mod connection;
pub mod k8s;
pub mod lifecycle;

pub use client::{KubeResourceClient, ResourceClient};
pub use k8s::{Manifest, WorkloadStatus};
pub use lifecycle::{dispatch, resolve, Lifecycle, LifecycleAction, Outcome};
