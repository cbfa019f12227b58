use launch_common::{
    error::{LaunchError, LaunchResult},
    settings::{get_config, ConnectionMode, Settings, CONFIG_INSTANCE},
};

use crate::Cli;

/// Load settings, fold in the command line overrides and publish them globally.
pub fn init_config(cli: &Cli) -> LaunchResult<&'static Settings> {
    let mut settings = Settings::load(cli.settings.clone())?;
    cli.apply_overrides(&mut settings);
    CONFIG_INSTANCE
        .set(settings)
        .map_err(|_| LaunchError::Cli("Config already initialized".to_string()))?;
    get_config()
}

impl Cli {
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(namespace) = &self.namespace {
            settings.namespace = namespace.clone();
        }
        if self.in_cluster {
            settings.connection.mode = ConnectionMode::InCluster;
        }
        if let Some(kubeconfig) = &self.kubeconfig {
            settings.connection.mode = ConnectionMode::Kubeconfig;
            settings.connection.kubeconfig = Some(kubeconfig.clone());
        }
        if let Some(context) = &self.context {
            settings.connection.mode = ConnectionMode::Kubeconfig;
            settings.connection.context = Some(context.clone());
        }
    }
}
