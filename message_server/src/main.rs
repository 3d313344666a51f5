//! Message API server: reads config from the environment, connects to PostgreSQL,
//! ensures the messages table, and serves the API until Ctrl-C or SIGTERM.
//!
//! Run from repo root: `cargo run -p message-server`

use message_api::{app, connect, AppState, Config, PgMessageStore, PoolCell};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("message_api=info,message_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pools = PoolCell::new();
    let pool = pools.get_or_try_init(|| connect(&config.db)).await?;
    let state = AppState::new(Arc::new(PgMessageStore::new(pool)));

    let listener = TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
