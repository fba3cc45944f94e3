use std::sync::Arc;
use tracing::info;

use crate::application::dto::PortDto;
use crate::application::errors::PortUseCaseError;
use crate::application::ports::PortRepository;
use crate::domain::entities::Port;
use crate::domain::value_objects::PortId;

/// Use case: Replace an existing port
///
/// The stored record is replaced wholesale; fields missing from the request
/// are not merged from the previous value.
pub struct UpdatePortUseCase {
    port_repo: Arc<dyn PortRepository>,
}

impl UpdatePortUseCase {
    pub fn new(port_repo: Arc<dyn PortRepository>) -> Self {
        Self { port_repo }
    }

    pub async fn execute(&self, id: &str, request: PortDto) -> Result<(), PortUseCaseError> {
        let id = PortId::new(id)?;
        let port = Port::from(request);
        port.validate()?;

        self.port_repo.update(&id, port).await?;

        info!(port_id = %id, "Port updated");
        Ok(())
    }
}
