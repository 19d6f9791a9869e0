use crate::services::base::cluster_admin::ClusterAdmin;
use crate::services::base::cluster_client::{ClusterClient, CommandExecutionError};
use crate::services::base::context_store::ClusterContext;
use crate::services::base::status::ClusterStatus;
use async_trait::async_trait;
use std::sync::Mutex;

/// A call received by the recording admin, with the name of the context it ran under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCall {
    RecreateNamespace { context: String, namespace: String },
    CreateRegistrySecret { context: String, namespace: String },
    DeleteNamespace { context: String, namespace: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecreateOutcome {
    #[default]
    Created,
    TimedOut,
    Failed,
}

#[derive(Default)]
pub struct RecordingClusterAdmin {
    calls: Mutex<Vec<AdminCall>>,
    recreate_outcome: RecreateOutcome,
    fail_registry_secret: bool,
    fail_delete: bool,
}

impl RecordingClusterAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recreate_outcome(mut self, outcome: RecreateOutcome) -> Self {
        self.recreate_outcome = outcome;
        self
    }

    pub fn failing_registry_secret(mut self) -> Self {
        self.fail_registry_secret = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn calls(&self) -> Vec<AdminCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deleted_namespaces(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                AdminCall::DeleteNamespace { namespace, .. } => Some(namespace),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: AdminCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ClusterAdmin for RecordingClusterAdmin {
    async fn recreate_namespace(&self, context: &ClusterContext, name: &str) -> Result<(), ClusterStatus> {
        self.record(AdminCall::RecreateNamespace {
            context: context.name.clone(),
            namespace: name.to_string(),
        });
        match self.recreate_outcome {
            RecreateOutcome::Created => Ok(()),
            RecreateOutcome::TimedOut => Err(ClusterStatus::Timeout(format!("namespace {} is terminating", name))),
            RecreateOutcome::Failed => Err(ClusterStatus::Conflict),
        }
    }

    async fn create_registry_secret(&self, context: &ClusterContext) -> Result<(), ClusterStatus> {
        self.record(AdminCall::CreateRegistrySecret {
            context: context.name.clone(),
            namespace: context.namespace.clone(),
        });
        if self.fail_registry_secret {
            return Err(ClusterStatus::Configuration(anyhow::anyhow!("registry is unreachable")));
        }
        Ok(())
    }

    async fn delete_namespace(&self, context: &ClusterContext, name: &str) -> Result<(), ClusterStatus> {
        self.record(AdminCall::DeleteNamespace {
            context: context.name.clone(),
            namespace: name.to_string(),
        });
        if self.fail_delete {
            return Err(ClusterStatus::Timeout(format!("namespace {} is still terminating", name)));
        }
        Ok(())
    }
}

/// Cluster client answering every command with the same output or the same failure
pub struct StaticClusterClient {
    response: Result<String, String>,
    commands: Mutex<Vec<Vec<String>>>,
}

impl StaticClusterClient {
    pub fn responding(output: &str) -> Self {
        StaticClusterClient {
            response: Ok(output.to_string()),
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(cause: &str) -> Self {
        StaticClusterClient {
            response: Err(cause.to_string()),
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClusterClient for StaticClusterClient {
    async fn execute(&self, error_message: &str, args: &[&str]) -> Result<String, CommandExecutionError> {
        self.commands
            .lock()
            .unwrap()
            .push(args.iter().map(|arg| arg.to_string()).collect());
        self.response
            .clone()
            .map_err(|cause| CommandExecutionError::new(error_message, cause))
    }
}
