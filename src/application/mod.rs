pub mod builder;
pub mod dto;
pub mod errors;
pub mod ingestion;
pub mod ports;
pub mod use_cases;
