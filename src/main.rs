use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use folio::application::ports::JobStore;
use folio::application::services::{JobReaper, JobTracker, ParseExecutor, TrackerConfig};
use folio::domain::ParseOutcome;
use folio::infrastructure::observability::{TracingConfig, init_tracing};
use folio::infrastructure::persistence::InMemoryJobStore;
use folio::infrastructure::text_processing::ParserFactory;
use folio::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, environment) = Settings::load().context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let parser = ParserFactory::create(&settings.parser, settings.jobs.execution_timeout());
    let executor = Arc::new(ParseExecutor::new(parser));

    let store: Arc<dyn JobStore<ParseOutcome>> = Arc::new(InMemoryJobStore::new());
    let tracker_config = TrackerConfig {
        ttl: settings.jobs.job_ttl()?,
        execution_timeout: settings.jobs.execution_timeout(),
    };
    let tracker = Arc::new(JobTracker::new(store, executor, tracker_config));

    match settings.jobs.eviction_interval() {
        Some(interval) => {
            tokio::spawn(JobReaper::new(Arc::clone(&tracker), interval).run());
        }
        None => tracing::info!("Active job eviction disabled; expired jobs are hidden on lookup"),
    }

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        tracker,
        settings,
    };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
