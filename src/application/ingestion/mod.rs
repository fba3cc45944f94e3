//! Bulk loading of port records from a keyed JSON document.
//!
//! A blocking producer ([`decoder::decode_ports`]) streams entries out of the
//! document onto a bounded channel; a consumer task created by
//! [`IngestionPipeline`] drains the channel into a [`PortRepository`].
//! A full channel blocks the producer, which bounds the number of records
//! held in memory to the configured buffer size.
//!
//! [`PortRepository`]: crate::application::ports::PortRepository

pub mod config;
pub mod decoder;
pub mod errors;
pub mod pipeline;
pub mod results;

pub use config::IngestionConfig;
pub use decoder::{decode_ports, DecodedEntry};
pub use errors::IngestError;
pub use pipeline::{IngestionHandle, IngestionPipeline};
pub use results::{DecodeSummary, IngestionReport};
