use std::{env, path::PathBuf, sync::OnceLock};

use config::{Environment, File};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, LaunchResult};
use crate::workload::{DeploymentDefinition, JobDefinition, PodDefinition};

pub static CONFIG_INSTANCE: OnceLock<Settings> = OnceLock::new();

pub const ENV_PREFIX: &str = "KL";

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionMode {
    /// In-cluster service account when available, kubeconfig otherwise
    #[default]
    Infer,
    Kubeconfig,
    InCluster,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ConnectionSettings {
    pub mode: ConnectionMode,
    /// Explicit kubeconfig file; `KUBECONFIG` / `~/.kube/config` when unset
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub connection: ConnectionSettings,

    #[serde(default)]
    pub pod: PodDefinition,

    #[serde(default)]
    pub deployment: DeploymentDefinition,

    #[serde(default)]
    pub job: JobDefinition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            namespace: default_namespace(),
            connection: ConnectionSettings::default(),
            pod: PodDefinition::default(),
            deployment: DeploymentDefinition::default(),
            job: JobDefinition::default(),
        }
    }
}

pub fn get_config() -> LaunchResult<&'static Settings> {
    CONFIG_INSTANCE
        .get()
        .ok_or_else(|| LaunchError::Cli("Config not initialized".to_string()))
}

impl Settings {
    /// Layer the conventional `config*` files in the working directory, an optional
    /// explicit settings file, then `KL__*` environment variables. Later layers win.
    pub fn load(settings_file: Option<PathBuf>) -> LaunchResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut s = config::Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config.{}", run_mode)).required(false));
        if let Some(path) = settings_file {
            if !path.is_file() {
                return Err(LaunchError::Cli(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            s = s.add_source(File::from(path.as_path()));
        }
        let s = s
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
            .build()?;

        let cfg = s.try_deserialize()?;
        Ok(cfg)
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_namespace() -> String {
    "default".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use super::*;
    use crate::workload::RestartPolicy;

    // `KL__*` variables are process wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const JOB_YAML: &str = r#"
namespace: batch
connection:
  mode: in-cluster
job:
  name: reverser
  restart_policy: Never
  ttl_seconds_after_finished: 60
  container:
    name: reverser
    image: nginx:latest
    ports: [8080]
"#;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_default() {
        let settings = Settings::default();
        assert_eq!(settings.namespace, "default");
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.connection.mode, ConnectionMode::Infer);
        assert_eq!(settings.job.name, "demo");
    }

    #[test]
    fn load_from_yaml_file() {
        let _env = ENV_LOCK.lock().unwrap();
        let file = settings_file(JOB_YAML);

        let settings = Settings::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(settings.namespace, "batch");
        assert_eq!(settings.connection.mode, ConnectionMode::InCluster);
        assert_eq!(settings.job.name, "reverser");
        assert_eq!(settings.job.restart_policy, RestartPolicy::Never);
        assert_eq!(settings.job.ttl_seconds_after_finished, Some(60));
        assert_eq!(settings.job.container.image, "nginx:latest");
        assert_eq!(settings.job.container.ports, vec![8080]);
        // untouched sections keep their defaults
        assert_eq!(settings.pod, PodDefinition::default());
        assert_eq!(settings.deployment, DeploymentDefinition::default());
    }

    #[test]
    fn example_settings_match_defaults() {
        let _env = ENV_LOCK.lock().unwrap();
        let example = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../config/kl.example.yaml");
        let settings = Settings::load(Some(example)).unwrap();

        assert_eq!(settings.connection.mode, ConnectionMode::Kubeconfig);
        assert_eq!(settings.pod, PodDefinition::default());
        assert_eq!(settings.deployment, DeploymentDefinition::default());
        assert_eq!(settings.job, JobDefinition::default());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let _env = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, LaunchError::Cli(_)));
    }

    #[test]
    fn env_overrides_settings_file() {
        let _env = ENV_LOCK.lock().unwrap();
        let file = settings_file(JOB_YAML);

        env::set_var("KL__NAMESPACE", "staging");
        env::set_var("KL__JOB__TTL_SECONDS_AFTER_FINISHED", "30");
        let settings = Settings::load(Some(file.path().to_path_buf()));
        env::remove_var("KL__NAMESPACE");
        env::remove_var("KL__JOB__TTL_SECONDS_AFTER_FINISHED");

        let settings = settings.unwrap();
        assert_eq!(settings.namespace, "staging");
        assert_eq!(settings.job.ttl_seconds_after_finished, Some(30));
        // keys not set in the environment still come from the file
        assert_eq!(settings.job.name, "reverser");
        assert_eq!(settings.connection.mode, ConnectionMode::InCluster);
    }
}
