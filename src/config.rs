use std::path::PathBuf;
use std::time::Duration;

use crate::application::ingestion::IngestionConfig;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Keyed document loaded at startup; `None` skips the bulk load
    pub seed_file: Option<PathBuf>,
    /// Records buffered between the seed decoder and the store writer
    pub ingest_buffer_size: usize,
    pub shutdown_timeout_secs: u64,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            seed_file: Some(PathBuf::from("./assets/ports.json")),
            ingest_buffer_size: IngestionConfig::default().buffer_size,
            shutdown_timeout_secs: 10,
            max_body_bytes: 64 * 1024,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            // An explicitly empty SEED_FILE disables the bulk load
            seed_file: match std::env::var("SEED_FILE") {
                Ok(path) if path.trim().is_empty() => None,
                Ok(path) => Some(PathBuf::from(path)),
                Err(_) => defaults.seed_file,
            },
            ingest_buffer_size: std::env::var("INGEST_BUFFER_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.ingest_buffer_size),
            shutdown_timeout_secs: std::env::var("SHUTDOWN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.shutdown_timeout_secs),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            log_format: std::env::var("LOG_FORMAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        IngestionConfig::new(self.ingest_buffer_size)
            .validate()
            .map_err(|e| format!("INGEST_BUFFER_SIZE: {}", e))?;

        if self.shutdown_timeout_secs == 0 {
            return Err("SHUTDOWN_TIMEOUT_SECS must be at least 1 second".to_string());
        }

        if self.max_body_bytes < 1024 {
            return Err("MAX_BODY_BYTES must be at least 1024".to_string());
        }

        Ok(())
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
