use crate::configuration::models::harness_settings::HarnessSettings;
use crate::services::backends::Backend;
use crate::services::backends::memory::ContextRegistry;
use crate::services::base::cluster_admin::ClusterAdmin;
use crate::services::base::cluster_client::ClusterClient;
use crate::services::base::context_store::ContextStore;
use crate::services::service_provider::ServiceProvider;
use crate::testing::cluster_doubles::{RecordingClusterAdmin, StaticClusterClient};
use crate::testing::test_settings;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Backend wired to the recording doubles, logging into a temporary directory
pub struct FakeBackend {
    pub contexts: Arc<ContextRegistry>,
    pub admin: Arc<RecordingClusterAdmin>,
    pub client: Arc<StaticClusterClient>,
    pub settings: Arc<HarnessSettings>,
    _logs_root: TempDir,
}

impl FakeBackend {
    pub fn new(admin: RecordingClusterAdmin, client: StaticClusterClient, default_namespace: Option<&str>) -> Self {
        let logs_root = TempDir::new().expect("Failed to create logs directory");
        let settings = test_settings(&logs_root.path().join("logs"), default_namespace);
        let contexts = ContextRegistry::from_settings(&settings).expect("Failed to create context registry");
        FakeBackend {
            contexts: Arc::new(contexts),
            admin: Arc::new(admin),
            client: Arc::new(client),
            settings: Arc::new(settings),
            _logs_root: logs_root,
        }
    }

    pub fn with_admin(admin: RecordingClusterAdmin) -> Self {
        Self::new(admin, StaticClusterClient::responding(""), None)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.settings.logs_dir.clone()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::with_admin(RecordingClusterAdmin::new())
    }
}

impl ServiceProvider<Arc<dyn ContextStore>> for FakeBackend {
    fn get(&self) -> Arc<dyn ContextStore> {
        self.contexts.clone()
    }
}

impl ServiceProvider<Arc<dyn ClusterAdmin>> for FakeBackend {
    fn get(&self) -> Arc<dyn ClusterAdmin> {
        self.admin.clone()
    }
}

impl ServiceProvider<Arc<dyn ClusterClient>> for FakeBackend {
    fn get(&self) -> Arc<dyn ClusterClient> {
        self.client.clone()
    }
}

impl ServiceProvider<Arc<HarnessSettings>> for FakeBackend {
    fn get(&self) -> Arc<HarnessSettings> {
        self.settings.clone()
    }
}

impl Backend for FakeBackend {}
