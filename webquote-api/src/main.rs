use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webquote_api::{app, AppState};
use webquote_core::QuotationLedger;
use webquote_export::PlainTextRenderer;
use webquote_store::{Config, FileLedger, InMemoryLedger, LedgerBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webquote_api=debug,webquote_export=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting quotation service on port {}", config.server.port);

    let ledger: Arc<dyn QuotationLedger> = match config.ledger.backend {
        LedgerBackend::File => Arc::new(
            FileLedger::open(&config.ledger.directory)
                .await
                .context("Failed to open quotation ledger")?,
        ),
        LedgerBackend::Memory => {
            tracing::warn!("Using in-memory ledger; history is lost on restart");
            Arc::new(InMemoryLedger::new())
        }
    };

    let app_state = AppState::from_config(&config, ledger, Arc::new(PlainTextRenderer));
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
