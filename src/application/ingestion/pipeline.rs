use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::application::dto::PortRecord;
use crate::application::ingestion::config::IngestionConfig;
use crate::application::ingestion::decoder::decode_ports;
use crate::application::ingestion::errors::IngestError;
use crate::application::ingestion::results::{DecodeSummary, IngestionReport};
use crate::application::ports::PortRepository;

/// Bounded producer/consumer pipeline loading ports into a repository.
///
/// # Examples
///
/// ```rust,ignore
/// let pipeline = IngestionPipeline::new(repo, IngestionConfig::new(10))?;
/// let handle = pipeline.load_file("./assets/ports.json", cancel.clone()).await?;
///
/// // Decoding is over here, but buffered records may still be in flight
/// let report = handle.wait().await?;
/// println!("Loaded {} ports", report.applied);
/// ```
pub struct IngestionPipeline {
    port_repo: Arc<dyn PortRepository>,
    config: IngestionConfig,
}

impl IngestionPipeline {
    pub fn new(
        port_repo: Arc<dyn PortRepository>,
        config: IngestionConfig,
    ) -> Result<Self, IngestError> {
        config.validate()?;
        Ok(Self { port_repo, config })
    }

    /// Open `path` and run the pipeline over its contents
    pub async fn load_file(
        &self,
        path: impl AsRef<Path>,
        cancel: CancellationToken,
    ) -> Result<IngestionHandle, IngestError> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            error!(path = %path.display(), "Failed to open seed file: {}", e);
            e
        })?;
        info!(path = %path.display(), "Loading ports from seed file");

        self.run(BufReader::new(file.into_std().await), cancel)
            .await
    }

    /// Decode `reader` and apply every record to the repository.
    ///
    /// Returns once the decoder is done and the channel has been closed. The
    /// consumer may still be applying buffered records at that point; call
    /// [`IngestionHandle::wait`] when the load has to be complete.
    ///
    /// A decode error or cancellation is returned as the terminal result.
    pub async fn run<R>(
        &self,
        reader: R,
        cancel: CancellationToken,
    ) -> Result<IngestionHandle, IngestError>
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(self.config.buffer_size);

        let consumer = tokio::spawn(consume(
            Arc::clone(&self.port_repo),
            rx,
            cancel.clone(),
        ));

        let producer = tokio::task::spawn_blocking(move || {
            let result = decode_ports(reader, &tx, &cancel);
            // No more data: closing the channel lets the consumer finish
            drop(tx);
            result
        });

        match producer.await? {
            Ok(summary) => {
                info!(
                    entries = summary.total(),
                    decoded = summary.decoded,
                    "Seed document decoded"
                );
                if summary.has_skipped() {
                    warn!(
                        skipped = summary.skipped,
                        "Some seed entries were not valid ports and were dropped"
                    );
                }
                Ok(IngestionHandle { summary, consumer })
            }
            // The consumer gave up first; its error explains why
            Err(IngestError::ChannelClosed) => match consumer.await? {
                Err(e) => Err(e),
                Ok(_) => Err(IngestError::ChannelClosed),
            },
            Err(IngestError::Cancelled) => {
                warn!("Seed loading cancelled before the document was fully read");
                Err(IngestError::Cancelled)
            }
            Err(e) => {
                error!("Failed to decode seed document: {}", e);
                Err(e)
            }
        }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }
}

/// Completion signal for a running load
pub struct IngestionHandle {
    summary: DecodeSummary,
    consumer: JoinHandle<Result<ConsumerOutcome, IngestError>>,
}

impl IngestionHandle {
    /// Counts from the finished decoding pass
    pub fn summary(&self) -> DecodeSummary {
        self.summary
    }

    /// Wait for the consumer to drain the channel.
    ///
    /// Fails with [`IngestError::Apply`] if a record could not be written for
    /// a reason other than cancellation.
    pub async fn wait(self) -> Result<IngestionReport, IngestError> {
        let outcome = self.consumer.await??;
        Ok(IngestionReport::new(
            self.summary,
            outcome.applied,
            outcome.interrupted,
        ))
    }
}

#[derive(Debug, Clone, Copy)]
struct ConsumerOutcome {
    applied: usize,
    interrupted: bool,
}

async fn consume(
    port_repo: Arc<dyn PortRepository>,
    mut rx: mpsc::Receiver<PortRecord>,
    cancel: CancellationToken,
) -> Result<ConsumerOutcome, IngestError> {
    let mut applied = 0;

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                info!(applied, "Seed loading interrupted by shutdown");
                return Ok(ConsumerOutcome { applied, interrupted: true });
            }
            record = rx.recv() => {
                let Some(PortRecord { id, port }) = record else {
                    info!(applied, "All seed ports applied");
                    return Ok(ConsumerOutcome { applied, interrupted: false });
                };

                match port_repo.create(&id, port).await {
                    Ok(()) => applied += 1,
                    // Shutdown raced the write; nothing to report
                    Err(_) if cancel.is_cancelled() => continue,
                    Err(source) => {
                        error!(port_id = %id, "failed to add port: {}", source);
                        return Err(IngestError::Apply { id, source });
                    }
                }
            }
        }
    }
}
