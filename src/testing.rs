use crate::configuration::models::cluster_settings::ClusterSettings;
use crate::configuration::models::harness_settings::HarnessSettings;
use crate::configuration::models::master_settings::MasterSettings;
use std::path::Path;
use std::time::Duration;

pub mod cluster_doubles;
pub mod fake_backend;
pub mod project_handler_context;

pub const TEST_CLUSTER_URL: &str = "https://api.cluster.test:6443";

/// Settings of a harness pointed at a cluster that is never contacted by the test doubles
pub fn test_settings(logs_dir: &Path, default_namespace: Option<&str>) -> HarnessSettings {
    HarnessSettings {
        cluster: ClusterSettings {
            url: TEST_CLUSTER_URL.to_string(),
            accept_invalid_certs: true,
            admin_username: Some("admin".to_string()),
            admin_password: Some("admin-password".to_string()),
            admin_token: None,
        },
        master: MasterSettings {
            namespace: default_namespace.map(str::to_string),
            username: "tester".to_string(),
            password: "tester-password".to_string(),
        },
        registry: None,
        logs_dir: logs_dir.to_path_buf(),
        operation_timeout: Duration::from_secs(5).into(),
        cli_binary: "oc".to_string(),
    }
}
