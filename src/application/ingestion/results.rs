/// Counts produced by one pass of the streaming decoder
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Entries decoded and accepted by the channel
    pub decoded: usize,
    /// Entries whose body could not be decoded into a port and were dropped
    pub skipped: usize,
}

impl DecodeSummary {
    /// Number of top-level keys seen by the decoder
    pub fn total(&self) -> usize {
        self.decoded + self.skipped
    }

    pub fn has_skipped(&self) -> bool {
        self.skipped > 0
    }
}

/// Outcome of a complete bulk load, available once the consumer has finished
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestionReport {
    pub decoded: usize,
    pub skipped: usize,
    /// Records written to the repository
    pub applied: usize,
    /// True when the consumer stopped because of cancellation rather than
    /// channel closure
    pub interrupted: bool,
}

impl IngestionReport {
    pub fn new(summary: DecodeSummary, applied: usize, interrupted: bool) -> Self {
        Self {
            decoded: summary.decoded,
            skipped: summary.skipped,
            applied,
            interrupted,
        }
    }

    /// Every decoded record reached the repository
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.applied == self.decoded
    }
}
