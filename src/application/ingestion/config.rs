use crate::application::ingestion::errors::IngestError;

/// Configuration for the bulk ingestion pipeline
#[derive(Debug, Clone)]
pub struct IngestionConfig {
    /// Number of decoded records that may wait in the channel between the
    /// decoder and the consumer. The decoder blocks once it is reached.
    pub buffer_size: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self { buffer_size: 10 }
    }
}

impl IngestionConfig {
    /// Upper bound accepted by [`IngestionConfig::validate`]
    pub const MAX_BUFFER_SIZE: usize = 100_000;

    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    pub fn validate(&self) -> Result<(), IngestError> {
        if self.buffer_size == 0 {
            return Err(IngestError::InvalidConfig(
                "buffer size must be at least 1".to_string(),
            ));
        }

        if self.buffer_size > Self::MAX_BUFFER_SIZE {
            return Err(IngestError::InvalidConfig(format!(
                "buffer size too large: {} > {}",
                self.buffer_size,
                Self::MAX_BUFFER_SIZE
            )));
        }

        Ok(())
    }
}
