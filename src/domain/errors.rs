use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid port ID: {0}")]
    InvalidPortId(String),

    /// Carries the exact message returned to API clients.
    #[error("{0}")]
    Validation(String),
}
