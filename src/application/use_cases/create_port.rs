use std::sync::Arc;
use tracing::info;

use crate::application::dto::PortDto;
use crate::application::errors::PortUseCaseError;
use crate::application::ports::PortRepository;
use crate::domain::entities::Port;
use crate::domain::value_objects::PortId;

/// Use case: Create a new port
pub struct CreatePortUseCase {
    port_repo: Arc<dyn PortRepository>,
}

impl CreatePortUseCase {
    pub fn new(port_repo: Arc<dyn PortRepository>) -> Self {
        Self { port_repo }
    }

    pub async fn execute(&self, id: &str, request: PortDto) -> Result<(), PortUseCaseError> {
        // 1. Validate identifier and payload
        let id = PortId::new(id)?;
        let port = Port::from(request);
        port.validate()?;

        // 2. Insert; duplicates are rejected by the repository
        self.port_repo.create(&id, port).await?;

        info!(port_id = %id, "Port created");
        Ok(())
    }
}
