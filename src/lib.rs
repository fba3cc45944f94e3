//! # PortStore - In-Memory Port Registry
//!
//! A small REST service holding geographic port records (name, country,
//! city, province, coordinates) keyed by an external identifier, with an
//! optional bulk load from a keyed JSON document at startup.
//!
//! ## Architecture Layers
//!
//! - **Domain**: `Port` entity, `PortId` value object, validation rules
//! - **Application**: repository port, use cases, bulk ingestion pipeline
//! - **Infrastructure**: in-memory repository behind a reader/writer lock
//! - **API**: axum handlers and OpenAPI document
//!
//! ## Bulk Ingestion
//!
//! The seed document is streamed: a blocking decoder reads one entry at a
//! time and hands it over a bounded channel to a consumer task that writes
//! into the repository. A full channel stalls the decoder, so memory use is
//! bounded by the channel capacity rather than the document size.
//!
//! ## Example Usage
//!
//! ```no_run
//! use port_store::application::ingestion::{IngestionConfig, IngestionPipeline};
//! use port_store::infrastructure::memory::InMemoryPortRepository;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Arc::new(InMemoryPortRepository::new());
//! let pipeline = IngestionPipeline::new(repo.clone(), IngestionConfig::new(10))?;
//!
//! let report = pipeline
//!     .load_file("./assets/ports.json", CancellationToken::new())
//!     .await?
//!     .wait()
//!     .await?;
//! assert_eq!(report.applied, repo.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ingestion, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
