//! Common error type shared by the port use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

/// Error type for port use cases (create, get, update)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortUseCaseError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Repository(#[from] RepositoryError),
}
