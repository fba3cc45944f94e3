use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::value_objects::PortId;

/// Terminal outcome of a failed or interrupted bulk load
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document structure is broken: root is not an object, a key is not
    /// a string, or the syntax is invalid.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Ingestion cancelled")]
    Cancelled,

    #[error("Ingestion channel closed by the consumer")]
    ChannelClosed,

    #[error("failed to add port \"{id}\": {source}")]
    Apply {
        id: PortId,
        #[source]
        source: RepositoryError,
    },

    #[error("Ingestion task failed: {0}")]
    Join(String),

    #[error("Invalid ingestion config: {0}")]
    InvalidConfig(String),
}

impl IngestError {
    /// Cancellation is an expected shutdown path, not a failure to escalate
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<tokio::task::JoinError> for IngestError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_error_names_the_port() {
        let err = IngestError::Apply {
            id: PortId::new("AEAJM").unwrap(),
            source: RepositoryError::AlreadyExists("AEAJM".to_string()),
        };

        assert_eq!(err.to_string(), "failed to add port \"AEAJM\": port already exist");
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_cancelled() {
        assert!(IngestError::Cancelled.is_cancelled());
    }
}
