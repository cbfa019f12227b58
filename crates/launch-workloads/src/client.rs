use std::fmt::Debug;

use k8s_openapi::NamespaceResourceScope;
use kube::api::{DeleteParams, PostParams};
use kube::{Api, Client, Resource};
use launch_common::error::LaunchResult;
use launch_common::{debug, trace};
use serde::{de::DeserializeOwned, Serialize};

/// The three remote calls a lifecycle needs against one namespaced resource type.
#[allow(async_fn_in_trait)]
pub trait ResourceClient {
    type Object;

    async fn create(&self, obj: &Self::Object) -> LaunchResult<Self::Object>;

    async fn delete(&self, name: &str) -> LaunchResult<()>;

    async fn get(&self, name: &str) -> LaunchResult<Self::Object>;
}

/// [`ResourceClient`] backed by a namespaced `kube::Api`.
pub struct KubeResourceClient<K> {
    api: Api<K>,
}

impl<K> KubeResourceClient<K>
where
    K: Resource<Scope = NamespaceResourceScope>,
    <K as Resource>::DynamicType: Default,
{
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }
}

impl<K> ResourceClient for KubeResourceClient<K>
where
    K: Resource + Clone + DeserializeOwned + Serialize + Debug,
{
    type Object = K;

    async fn create(&self, obj: &K) -> LaunchResult<K> {
        trace!("POST {:?}", obj);
        let created = self.api.create(&PostParams::default(), obj).await?;
        Ok(created)
    }

    async fn delete(&self, name: &str) -> LaunchResult<()> {
        let result = self.api.delete(name, &DeleteParams::default()).await?;
        // Left: deletion started with finalizers pending, Right: already gone
        if result.is_left() {
            debug!("deletion of {} in progress", name);
        }
        Ok(())
    }

    async fn get(&self, name: &str) -> LaunchResult<K> {
        let obj = self.api.get(name).await?;
        Ok(obj)
    }
}
