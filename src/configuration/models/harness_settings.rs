
use crate::configuration::models::cluster_settings::ClusterSettings;
use crate::configuration::models::master_settings::MasterSettings;
use crate::configuration::models::registry_settings::RegistrySettings;
use anyhow::Context;
use duration_string::DurationString;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CLI_BINARY: &str = "oc";
const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Root settings document of the test harness.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessSettings {
    pub cluster: ClusterSettings,
    pub master: MasterSettings,
    pub registry: Option<RegistrySettings>,
    pub logs_dir: PathBuf,

    #[serde(default = "default_operation_timeout")]
    pub operation_timeout: DurationString,

    #[serde(default = "default_cli_binary")]
    pub cli_binary: String,
}

impl HarnessSettings {
    pub fn from_yaml_str(document: &str) -> anyhow::Result<Self> {
        let settings: HarnessSettings = serde_yml::from_str(document)?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read harness settings from {}", path.display()))?;
        Self::from_yaml_str(&document)
    }

    /// The namespace handlers fall back to when none is given explicitly.
    pub fn default_namespace(&self) -> Option<&str> {
        self.master.namespace.as_deref()
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout.into()
    }
}

fn default_operation_timeout() -> DurationString {
    DEFAULT_OPERATION_TIMEOUT.into()
}

fn default_cli_binary() -> String {
    DEFAULT_CLI_BINARY.to_string()
}
