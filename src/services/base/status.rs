use kube::core::ErrorResponse;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error type of cluster administration operations.
#[derive(Debug)]
pub enum ClusterStatus {
    Conflict,
    NotFound(String),
    Timeout(String),
    Other(kube::Error),
    Configuration(anyhow::Error),
}

impl ClusterStatus {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClusterStatus::Timeout(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClusterStatus::NotFound(_))
    }
}

impl From<kube::Error> for ClusterStatus {
    fn from(error: kube::Error) -> Self {
        match error {
            kube::Error::Api(ErrorResponse { code: 409, .. }) => ClusterStatus::Conflict,
            kube::Error::Api(ErrorResponse { code: 404, message, .. }) => ClusterStatus::NotFound(message),
            _ => ClusterStatus::Other(error),
        }
    }
}

impl From<anyhow::Error> for ClusterStatus {
    fn from(error: anyhow::Error) -> Self {
        ClusterStatus::Configuration(error)
    }
}

impl Display for ClusterStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterStatus::Conflict => write!(f, "Conflict error occurred"),
            ClusterStatus::NotFound(message) => write!(f, "Resource not found: {}", message),
            ClusterStatus::Timeout(message) => write!(f, "Operation timed out: {}", message),
            ClusterStatus::Other(e) => write!(f, "An error occurred: {}", e),
            ClusterStatus::Configuration(cause) => write!(f, "Cluster configuration error: {}", cause),
        }
    }
}

impl Error for ClusterStatus {}
