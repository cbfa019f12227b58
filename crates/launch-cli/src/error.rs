use launch_common::error::LaunchError;
use thiserror::Error;

pub type LaunchCliResult<T = (), E = LaunchCliError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum LaunchCliError {
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl From<serde_yaml::Error> for LaunchCliError {
    fn from(error: serde_yaml::Error) -> Self {
        LaunchCliError::Launch(error.into())
    }
}
