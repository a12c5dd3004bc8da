//! Kalk - Factorial Service
//!
//! Stateless HTTP service that takes two non-negative integers and returns
//! their factorials, computed concurrently.

mod config;
mod dto;
mod extractors;
mod handlers;
mod response;
mod routes;

use anyhow::{Context, Result};
use kalk_domain::{CalculationEngine, OverflowPolicy, Validator};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub validator: Validator,
    pub engine: CalculationEngine,
}

impl AppState {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self {
            validator: Validator::new(policy),
            engine: CalculationEngine::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    init_tracing(config.log_format);

    info!(
        policy = %config.overflow_policy,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting Kalk factorial service"
    );

    let state = AppState::new(config.overflow_policy);
    let app = routes::create_router(state, config.request_timeout);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

/// Default filter when `RUST_LOG` is unset: per-operand engine events included
const DEFAULT_LOG_FILTER: &str = "info,kalk_domain=debug";

/// Install the process-wide log subscriber
///
/// `RUST_LOG` selects the filter; defaults to [`DEFAULT_LOG_FILTER`].
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!(error = %err, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
