use std::sync::Arc;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ingestion::{IngestionConfig, IngestionPipeline},
    ports::PortRepository,
    use_cases::{CreatePortUseCase, GetPortUseCase, UpdatePortUseCase},
};
use crate::config::Config;
use crate::infrastructure::memory::InMemoryPortRepository;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    port_repo: Option<Arc<dyn PortRepository>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            port_repo: None,
        }
    }

    /// Initialize infrastructure layer (in-memory port store)
    pub fn with_infrastructure(self) -> Self {
        let port_repo: Arc<dyn PortRepository> = Arc::new(InMemoryPortRepository::new());
        info!("Infrastructure layer initialized");
        self.with_repository(port_repo)
    }

    /// Use an existing repository instead of a fresh one
    pub fn with_repository(mut self, port_repo: Arc<dyn PortRepository>) -> Self {
        self.port_repo = Some(port_repo);
        self
    }

    /// Build application state with all use cases
    pub fn build(&self) -> Result<AppState, Box<dyn std::error::Error>> {
        let port_repo = self
            .port_repo
            .as_ref()
            .ok_or("Port repository not initialized")?;

        let app_state = AppState {
            create_use_case: Arc::new(CreatePortUseCase::new(Arc::clone(port_repo))),
            get_use_case: Arc::new(GetPortUseCase::new(Arc::clone(port_repo))),
            update_use_case: Arc::new(UpdatePortUseCase::new(Arc::clone(port_repo))),
            max_body_bytes: self.config.max_body_bytes,
        };

        info!("Application layer initialized");
        Ok(app_state)
    }

    /// Get the bulk ingestion pipeline writing into the same repository
    pub fn build_ingestion(&self) -> Result<IngestionPipeline, Box<dyn std::error::Error>> {
        let port_repo = self
            .port_repo
            .as_ref()
            .ok_or("Port repository not initialized")?;

        let pipeline = IngestionPipeline::new(
            Arc::clone(port_repo),
            IngestionConfig::new(self.config.ingest_buffer_size),
        )?;

        Ok(pipeline)
    }
}
