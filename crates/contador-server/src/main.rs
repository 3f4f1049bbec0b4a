//! contador server
//!
//! - `GET /healthcheck` : liveness
//! - `GET /contador`    : increment and return the shared counter
//! - `GET /metrics`     : request metrics (optional)
//!
//! Usage: `contador-server [config.yaml]` (default `contador.yaml`).

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contador_core::error::{ContadorError, Result};
use contador_server::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "contador.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = load_config(std::env::args().nth(1))?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "contador-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ContadorError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ContadorError::Internal(format!("server failed: {e}")))?;

    tracing::info!("contador-server stopped");
    Ok(())
}

/// An explicit path must load; the default path is optional.
fn load_config(arg: Option<String>) -> Result<config::ServiceConfig> {
    match arg {
        Some(path) => config::load_from_file(&path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => config::load_from_file(DEFAULT_CONFIG_PATH),
        None => {
            tracing::warn!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            Ok(config::ServiceConfig::default())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
