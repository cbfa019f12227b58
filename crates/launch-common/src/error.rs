pub type LaunchResult<T = (), E = LaunchError> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("CLI error: {0}")]
    Cli(String),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
    #[error("Command error: {0}")]
    IOError(#[from] std::io::Error),

    /// Rejection reported by the API server, e.g. `AlreadyExists` or `NotFound`
    #[error("({code}) {reason}: {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },
    /// Any other error originating from the `kube-rs` crate
    #[error("Kubernetes reported error: {source}")]
    Kube { source: kube::Error },

    #[error("Unable to infer cluster config: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),
    #[error("Unable to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),
    #[error("Unable to load in-cluster config: {0}")]
    InCluster(#[from] kube::config::InClusterError),

    #[error("Invalid Kubernetes Yaml: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}

impl From<kube::Error> for LaunchError {
    fn from(source: kube::Error) -> Self {
        match source {
            kube::Error::Api(response) => LaunchError::Api {
                code: response.code,
                reason: response.reason,
                message: response.message,
            },
            source => LaunchError::Kube { source },
        }
    }
}

impl LaunchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LaunchError::Api { code: 404, .. })
    }
}
