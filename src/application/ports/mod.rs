mod port_repository;

pub use port_repository::{PortRepository, RepositoryError};

#[cfg(test)]
pub use port_repository::MockPortRepository;
