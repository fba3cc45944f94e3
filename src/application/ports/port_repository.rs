use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Port;
use crate::domain::value_objects::PortId;
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("port not found")]
    NotFound(String),

    #[error("port already exist")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for port record storage.
///
/// Implementations must make all three operations linearizable with respect
/// to each other: no lost updates and no torn reads under concurrent callers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PortRepository: Send + Sync {
    /// Insert a new record; fails with `AlreadyExists` if the ID is taken
    async fn create(&self, id: &PortId, port: Port) -> Result<(), RepositoryError>;

    /// Fetch a copy of the stored record
    async fn get(&self, id: &PortId) -> Result<Port, RepositoryError>;

    /// Replace an existing record wholesale; fails with `NotFound` if absent
    async fn update(&self, id: &PortId, port: Port) -> Result<(), RepositoryError>;
}
