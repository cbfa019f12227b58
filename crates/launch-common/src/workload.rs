//! Workload definitions: the statically configured description of what gets
//! submitted to the cluster. Defaults reproduce the stock demo resources.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "demo";
pub const DEMO_LABEL_APP: &str = "sentence-reverser";
pub const DEMO_JOB_IMAGE: &str = "registry.hub.docker.com/kimsen1992/sentence-reverser";
pub const DEMO_WEBHOOK_URL: &str = "https://webhook.site/7a3a5242-2cee-4623-8dd2-89aa8a7fdd1b";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RestartPolicy {
    Always,
    OnFailure,
    Never,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Always => "Always",
            RestartPolicy::OnFailure => "OnFailure",
            RestartPolicy::Never => "Never",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvVarDefinition {
    pub name: String,
    pub value: String,
}

impl EnvVarDefinition {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContainerDefinition {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub ports: Vec<i32>,
    #[serde(default)]
    pub env: Vec<EnvVarDefinition>,
    #[serde(default)]
    pub args: Option<Vec<String>>,
}

impl ContainerDefinition {
    pub fn new(name: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            ..Default::default()
        }
    }

    pub fn port(mut self, port: i32) -> Self {
        self.ports.push(port);
        self
    }

    pub fn env(mut self, name: &str, value: &str) -> Self {
        self.env.push(EnvVarDefinition::new(name, value));
        self
    }
}

/// A "naked" Pod, not owned by any controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PodDefinition {
    pub name: String,
    pub container: ContainerDefinition,
    pub restart_policy: Option<RestartPolicy>,
}

impl Default for PodDefinition {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            container: ContainerDefinition::new("hello-world", "hello-world"),
            restart_policy: Some(RestartPolicy::OnFailure),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentDefinition {
    pub name: String,
    pub replicas: i32,
    pub labels: BTreeMap<String, String>,
    pub container: ContainerDefinition,
}

impl Default for DeploymentDefinition {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            replicas: 1,
            labels: demo_labels(),
            container: ContainerDefinition::new(DEMO_LABEL_APP, "nginx:latest").port(80),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JobDefinition {
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub container: ContainerDefinition,
    /// Seconds after completion before the server garbage collects the Job.
    pub ttl_seconds_after_finished: Option<i32>,
    pub restart_policy: RestartPolicy,
}

impl Default for JobDefinition {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            labels: demo_labels(),
            container: ContainerDefinition::new(DEMO_LABEL_APP, DEMO_JOB_IMAGE)
                .port(80)
                .env("SENTENCE", "Demo")
                .env("WEBHOOKURL", DEMO_WEBHOOK_URL),
            ttl_seconds_after_finished: Some(10),
            restart_policy: RestartPolicy::OnFailure,
        }
    }
}

fn demo_labels() -> BTreeMap<String, String> {
    BTreeMap::from_iter(vec![("app".to_string(), DEMO_LABEL_APP.to_string())])
}
