
use crate::services::base::cluster_client::{ClusterClient, CommandExecutionError};
use crate::services::base::context_store::{ClusterContext, ContextStore, Credentials};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::process::Command;

/// Runs the cluster CLI binary (`oc` or `kubectl`) against the current context.
pub struct BinaryClusterClient {
    binary: String,
    contexts: Arc<dyn ContextStore>,
}

impl BinaryClusterClient {
    pub fn new(binary: String, contexts: Arc<dyn ContextStore>) -> Self {
        BinaryClusterClient { binary, contexts }
    }
}

/// Connection flags selecting the cluster, namespace and credentials of the context.
/// They precede the command arguments so an explicit `-n` in the command takes precedence.
pub fn context_arguments(context: &ClusterContext) -> Vec<String> {
    let mut arguments = vec![
        format!("--server={}", context.cluster_url),
        format!("--namespace={}", context.namespace),
        format!("--insecure-skip-tls-verify={}", context.accept_invalid_certs),
    ];
    match &context.credentials {
        Credentials::Basic { username, password } => {
            arguments.push(format!("--username={}", username));
            arguments.push(format!("--password={}", password));
        }
        Credentials::Token(token) => arguments.push(format!("--token={}", token)),
    }
    arguments
}

#[async_trait]
impl ClusterClient for BinaryClusterClient {
    async fn execute(&self, error_message: &str, args: &[&str]) -> Result<String, CommandExecutionError> {
        let context = self.contexts.current_context();
        debug!("Executing {} {:?} in context {}", self.binary, args, context.name);

        let output = Command::new(&self.binary)
            .args(context_arguments(&context))
            .args(args)
            .output()
            .await
            .map_err(|e| CommandExecutionError::new(error_message, e.to_string()))?;

        if !output.status.success() {
            return Err(CommandExecutionError::new(
                error_message,
                String::from_utf8_lossy(&output.stderr),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
