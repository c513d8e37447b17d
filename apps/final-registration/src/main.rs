//! Final Registration Binary
//!
//! Starts the final registration service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin final-registration
//! ```
//!
//! # Environment Variables
//!
//! - `FINAL_REGISTRATION_CONFIG`: Path of the YAML config (default: config.yaml)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level` from config)
//!
//! Any `${VAR}` referenced by the config file is read from the environment or `.env`.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use final_registration::config::{Config, LoggingConfig, load_config};
use final_registration::infrastructure::config::ProductionContainer;
use final_registration::infrastructure::http::create_router;
use final_registration::observability::{MetricsConfig, init_metrics};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Graceful shutdown timeout.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable naming the config file.
const CONFIG_PATH_ENV: &str = "FINAL_REGISTRATION_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = load_config(config_path.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.observability.logging);

    tracing::info!("Starting final registration service");
    log_config(&config);

    if config.observability.metrics.enabled {
        let metrics_addr: SocketAddr = format!(
            "{}:{}",
            config.server.bind_address, config.observability.metrics.port
        )
        .parse()
        .context("invalid metrics listen address")?;
        init_metrics(&MetricsConfig::with_addr(metrics_addr))?;
    }

    let container =
        ProductionContainer::from_config(&config).context("failed to wire adapters")?;
    let app = create_router(container.app_state(env!("CARGO_PKG_VERSION")));

    let http_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()
        .context("invalid HTTP listen address")?;
    run_http_server(http_addr, app).await?;

    tracing::info!("Final registration service stopped");
    Ok(())
}

/// Serve the router until a shutdown signal arrives.
async fn run_http_server(addr: SocketAddr, app: Router) -> anyhow::Result<()> {
    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /final-registration");
    tracing::info!("  POST /final-registration");
    tracing::info!("  GET  /api/v1/personal-page/payment-status");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("final_registration={}", logging.level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

/// Log the loaded configuration.
fn log_config(config: &Config) {
    tracing::info!(
        conference = %config.conference.name,
        http_port = config.server.http_port,
        deadline = config.conference.final_registration_deadline.as_deref().unwrap_or("none"),
        final_registration_enabled = config.conference.final_registration_enabled,
        accompanying_persons_enabled = config.conference.accompanying_persons_enabled,
        payway = %config.payway.base_url,
        metrics_enabled = config.observability.metrics.enabled,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. A process that cannot
/// react to termination signals must not start.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    tracing::info!(
        timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
        "Graceful shutdown started"
    );
}
