use crate::configuration::models::harness_settings::HarnessSettings;
use crate::services::base::cluster_admin::ClusterAdmin;
use crate::services::base::cluster_client::ClusterClient;
use crate::services::base::context_store::ContextStore;
use crate::services::service_provider::ServiceProvider;
use async_trait::async_trait;
use std::sync::Arc;

pub mod kubernetes;
pub mod memory;

/// The collaborators a project handler works with
pub trait Backend:
    ServiceProvider<Arc<dyn ContextStore>>
    + ServiceProvider<Arc<dyn ClusterAdmin>>
    + ServiceProvider<Arc<dyn ClusterClient>>
    + ServiceProvider<Arc<HarnessSettings>>
    + Send
    + Sync
{
}

#[async_trait]
pub trait BackendConfiguration: Send + Sync + Sized {
    type BackendSettings;

    type InitializedBackend: Backend;

    async fn configure(self, settings: &Self::BackendSettings) -> anyhow::Result<Arc<Self::InitializedBackend>>;
}
