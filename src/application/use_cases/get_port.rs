use std::sync::Arc;

use crate::application::dto::PortDto;
use crate::application::errors::PortUseCaseError;
use crate::application::ports::PortRepository;
use crate::domain::value_objects::PortId;

/// Use case: Fetch a port by ID
pub struct GetPortUseCase {
    port_repo: Arc<dyn PortRepository>,
}

impl GetPortUseCase {
    pub fn new(port_repo: Arc<dyn PortRepository>) -> Self {
        Self { port_repo }
    }

    pub async fn execute(&self, id: &str) -> Result<PortDto, PortUseCaseError> {
        let id = PortId::new(id)?;
        let port = self.port_repo.get(&id).await?;

        Ok(PortDto::from(port))
    }
}
