use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use port_store::{
    api::create_router,
    application::ingestion::IngestionPipeline,
    config::LogFormat,
    ApplicationBuilder, Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing with structured logging
    init_tracing(config.log_format);
    info!("Starting port store service");

    config.validate()?;
    info!("Configuration loaded and validated");

    // Cancelled on SIGTERM / Ctrl-C, shared by the seed loader and the server
    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    let builder = ApplicationBuilder::new(config.clone()).with_infrastructure();

    if let Some(seed_file) = &config.seed_file {
        let pipeline = builder.build_ingestion()?;
        info!(
            buffer_size = pipeline.config().buffer_size,
            "Seed ingestion pipeline ready"
        );
        if !load_seed(&pipeline, seed_file, shutdown.clone()).await? {
            info!("Shutdown requested during seed loading, exiting");
            return Ok(());
        }
    } else {
        info!("No seed file configured, starting with an empty store");
    }

    let app = create_router(builder.build()?);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;

    let server_shutdown = shutdown.clone();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
            .await
    });
    info!("Server is ready");

    let timeout = config.shutdown_timeout();
    tokio::select! {
        result = server => result??,
        _ = async {
            shutdown.cancelled().await;
            tokio::time::sleep(timeout).await;
        } => {
            warn!(?timeout, "Graceful shutdown timed out, dropping open connections");
        }
    }

    info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}

/// Bulk-load the seed file and wait until every record is stored.
///
/// Returns `Ok(false)` when shutdown interrupted the load. Decode and apply
/// failures mean the seed document is broken and abort startup.
async fn load_seed(
    pipeline: &IngestionPipeline,
    seed_file: &std::path::Path,
    shutdown: CancellationToken,
) -> Result<bool, Box<dyn std::error::Error>> {
    let handle = match pipeline.load_file(seed_file, shutdown).await {
        Ok(handle) => handle,
        Err(e) if e.is_cancelled() => return Ok(false),
        Err(e) => {
            error!(path = %seed_file.display(), "Seed loading failed: {}", e);
            return Err(e.into());
        }
    };

    let report = handle.wait().await.map_err(|e| {
        error!(path = %seed_file.display(), "Seed loading failed: {}", e);
        e
    })?;

    if report.interrupted {
        return Ok(false);
    }

    info!(
        applied = report.applied,
        skipped = report.skipped,
        "Seed ports loaded"
    );
    Ok(true)
}

async fn watch_signals(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
    shutdown.cancel();
}
