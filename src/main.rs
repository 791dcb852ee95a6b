//! Server entry: settings from env, one table client for the process, CORS + tracing, serve.

use paws_adopt::{app, AppState, Client, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("paws_adopt=info,tower_http=info")),
        )
        .init();

    tracing::info!("starting pet adoption API");
    let settings = Settings::from_env()?;
    if settings.debug {
        tracing::info!("DEBUG=true: using in-memory tables, connection settings not checked");
    }
    let db = Client::from_settings(&settings)?;
    let bind_addr = settings.bind_addr;
    let state = AppState::new(db, settings);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
    }
}
