
pub mod binary_cluster_client;
pub mod kubeconfig;
pub mod kubernetes_cluster_admin;
pub mod registry_secret;

use crate::configuration::models::harness_settings::HarnessSettings;
use crate::services::backends::kubernetes::binary_cluster_client::BinaryClusterClient;
use crate::services::backends::kubernetes::kubeconfig::to_kube_config;
use crate::services::backends::kubernetes::kubernetes_cluster_admin::KubernetesClusterAdmin;
use crate::services::backends::memory::ContextRegistry;
use crate::services::backends::{Backend, BackendConfiguration};
use crate::services::base::cluster_admin::ClusterAdmin;
use crate::services::base::cluster_client::ClusterClient;
use crate::services::base::context_store::ContextStore;
use crate::services::service_provider::ServiceProvider;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

/// Backend talking to a live cluster through the Kubernetes API and the cluster CLI
pub struct KubernetesBackend {
    contexts: Arc<ContextRegistry>,
    admin: Arc<KubernetesClusterAdmin>,
    client: Arc<BinaryClusterClient>,
    settings: Arc<HarnessSettings>,
}

impl ServiceProvider<Arc<dyn ContextStore>> for KubernetesBackend {
    fn get(&self) -> Arc<dyn ContextStore> {
        self.contexts.clone()
    }
}

impl ServiceProvider<Arc<dyn ClusterAdmin>> for KubernetesBackend {
    fn get(&self) -> Arc<dyn ClusterAdmin> {
        self.admin.clone()
    }
}

impl ServiceProvider<Arc<dyn ClusterClient>> for KubernetesBackend {
    fn get(&self) -> Arc<dyn ClusterClient> {
        self.client.clone()
    }
}

impl ServiceProvider<Arc<HarnessSettings>> for KubernetesBackend {
    fn get(&self) -> Arc<HarnessSettings> {
        self.settings.clone()
    }
}

impl Backend for KubernetesBackend {}

pub struct KubernetesBackendConfiguration;

#[async_trait]
impl BackendConfiguration for KubernetesBackendConfiguration {
    type BackendSettings = HarnessSettings;
    type InitializedBackend = KubernetesBackend;

    async fn configure(self, settings: &Self::BackendSettings) -> anyhow::Result<Arc<Self::InitializedBackend>> {
        info!("Configuring Kubernetes backend for cluster {}", settings.cluster.url);
        let settings = Arc::new(settings.clone());
        let contexts = Arc::new(ContextRegistry::from_settings(&settings)?);

        // Fail early on an unusable cluster url or admin credentials
        to_kube_config(&contexts.admin_context()).await?;

        let admin = Arc::new(KubernetesClusterAdmin::new(
            settings.operation_timeout(),
            settings.registry.clone(),
        ));
        let client = Arc::new(BinaryClusterClient::new(settings.cli_binary.clone(), contexts.clone()));

        Ok(Arc::new(KubernetesBackend {
            contexts,
            admin,
            client,
            settings,
        }))
    }
}
