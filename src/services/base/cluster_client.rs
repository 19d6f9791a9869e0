use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of a command executed by a `ClusterClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExecutionError {
    pub message: String,
    pub cause: String,
}

impl CommandExecutionError {
    pub fn new(message: impl Into<String>, cause: impl Into<String>) -> Self {
        CommandExecutionError {
            message: message.into(),
            cause: cause.into(),
        }
    }
}

impl Display for CommandExecutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.cause.trim_end())
    }
}

impl Error for CommandExecutionError {}

#[async_trait]
/// Command line access to the cluster under test
pub trait ClusterClient: Send + Sync {
    /// Executes the command and returns its standard output.
    /// `error_message` describes the command in the error returned on failure.
    async fn execute(&self, error_message: &str, args: &[&str]) -> Result<String, CommandExecutionError>;
}
