//! Create / delete / status for a single named workload.
//!
//! Every operation is exactly one round trip through a [`ResourceClient`]. Rejections
//! from the API server are reported to the output and turned into
//! [`Outcome::Rejected`]; the caller keeps running. Anything that is not an API
//! response (transport, serialization, writing output) is returned as an error.
use std::io::Write;

use launch_common::error::{LaunchError, LaunchResult};
use launch_common::{debug, info};

use crate::client::ResourceClient;
use crate::k8s::WorkloadStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Create,
    Delete,
    Status,
}

impl LifecycleAction {
    /// Map the raw first argument onto an action. No argument means create;
    /// anything unrecognised yields `None`.
    pub fn from_arg(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("--create") => Some(LifecycleAction::Create),
            Some("--delete") => Some(LifecycleAction::Delete),
            Some("--status") => Some(LifecycleAction::Status),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// The API server refused the request; carries its message
    Rejected(String),
}

pub struct Lifecycle<C> {
    client: C,
    name: String,
}

impl<C> Lifecycle<C>
where
    C: ResourceClient,
    C::Object: k8s_openapi::Resource + WorkloadStatus,
{
    pub fn new(client: C, name: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        <C::Object as k8s_openapi::Resource>::KIND
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn create<W: Write>(&self, obj: &C::Object, out: &mut W) -> LaunchResult<Outcome> {
        writeln!(out, "Creating {} '{}'", self.kind(), self.name)?;
        let result = self.client.create(obj).await.map(|_| ());
        self.report("creating", result, out)
    }

    pub async fn delete<W: Write>(&self, out: &mut W) -> LaunchResult<Outcome> {
        writeln!(out, "Deleting {} '{}'", self.kind(), self.name)?;
        let result = self.client.delete(&self.name).await;
        self.report("deleting", result, out)
    }

    pub async fn status<W: Write>(&self, out: &mut W) -> LaunchResult<Outcome> {
        writeln!(out, "Getting status for {} '{}'", self.kind(), self.name)?;
        let obj = match self.client.get(&self.name).await {
            Ok(obj) => obj,
            Err(e) => return self.report("getting status for", Err(e), out),
        };
        match obj.workload_status() {
            Some(status) => write!(out, "{}", serde_yaml::to_string(status)?)?,
            None => writeln!(out, "No status reported for {} '{}'", self.kind(), self.name)?,
        }
        Ok(Outcome::Succeeded)
    }

    pub async fn run<W: Write>(
        &self,
        action: LifecycleAction,
        obj: &C::Object,
        out: &mut W,
    ) -> LaunchResult<Outcome> {
        debug!("{:?} {} '{}'", action, self.kind(), self.name);
        match action {
            LifecycleAction::Create => self.create(obj, out).await,
            LifecycleAction::Delete => self.delete(out).await,
            LifecycleAction::Status => self.status(out).await,
        }
    }

    fn report<W: Write>(
        &self,
        verb: &str,
        result: LaunchResult<()>,
        out: &mut W,
    ) -> LaunchResult<Outcome> {
        match result {
            Ok(()) => {
                info!("{} {} '{}' succeeded", verb, self.kind(), self.name);
                writeln!(out, "Success!")?;
                Ok(Outcome::Succeeded)
            }
            Err(e @ LaunchError::Api { .. }) => {
                writeln!(out, "Error when {} {} '{}': {}", verb, self.kind(), self.name, e)?;
                Ok(Outcome::Rejected(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

pub fn usage(kind: &str) -> String {
    format!(
        "Usage:\n\
         --create\n    create K8s {kind} based on the configured definition.\n\
         --delete\n    delete K8s {kind} with the configured name, if it exists.\n\
         --status\n    get status on K8s {kind} with the configured name, if it exists.\n"
    )
}

/// Resolve the raw argument, printing the usage text for `kind` when it is not an action.
pub fn resolve<W: Write>(
    arg: Option<&str>,
    kind: &str,
    out: &mut W,
) -> LaunchResult<Option<LifecycleAction>> {
    let action = LifecycleAction::from_arg(arg);
    if action.is_none() {
        debug!("unrecognised argument {:?}", arg);
        write!(out, "{}", usage(kind))?;
    }
    Ok(action)
}

/// Run the action selected by `arg` against `lifecycle`.
///
/// Returns `None` when the argument was not recognised and the usage text was printed.
pub async fn dispatch<C, W>(
    arg: Option<&str>,
    lifecycle: &Lifecycle<C>,
    obj: &C::Object,
    out: &mut W,
) -> LaunchResult<Option<Outcome>>
where
    C: ResourceClient,
    C::Object: k8s_openapi::Resource + WorkloadStatus,
    W: Write,
{
    let Some(action) = resolve(arg, lifecycle.kind(), out)? else {
        return Ok(None);
    };
    let outcome = lifecycle.run(action, obj, out).await?;
    Ok(Some(outcome))
}
