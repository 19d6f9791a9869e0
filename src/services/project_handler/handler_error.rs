use crate::services::base::status::ClusterStatus;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by the project handler lifecycle
#[derive(Debug)]
pub enum HandlerError {
    InvalidArgument(String),
    IllegalReuse,
    Cluster(ClusterStatus),
    Context(anyhow::Error),
}

impl HandlerError {
    pub fn is_illegal_reuse(&self) -> bool {
        matches!(self, HandlerError::IllegalReuse)
    }
}

impl From<ClusterStatus> for HandlerError {
    fn from(status: ClusterStatus) -> Self {
        HandlerError::Cluster(status)
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(error: anyhow::Error) -> Self {
        HandlerError::Context(error)
    }
}

impl Display for HandlerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
            HandlerError::IllegalReuse => write!(f, "Project handler was already used, create a new handler"),
            HandlerError::Cluster(status) => write!(f, "{}", status),
            HandlerError::Context(cause) => write!(f, "Context error: {}", cause),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Cluster(status) => Some(status),
            HandlerError::Context(cause) => Some(&**cause),
            _ => None,
        }
    }
}
