//! Portfolio website server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser request
//!     ───────────────▶ http::server ──┬── /api/routes, /api/resolve ──▶ routing::Router
//!                                     ├── /info ─────────────────────▶ system::collect
//!                                     └── fallback ──▶ routing::Router ──▶ views::View::render
//!
//!     Startup: config (TOML) → logging/metrics → routing::build_with_base → bind → serve
//!     Shutdown: SIGINT/SIGTERM → lifecycle::Shutdown → graceful drain
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use portfolio_site::config::{load_config, validation::validate_config, ConfigError, SiteConfig};
use portfolio_site::http::HttpServer;
use portfolio_site::lifecycle::{signals, Shutdown};
use portfolio_site::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Serve the portfolio website", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `history.base`.
    #[arg(long)]
    base: Option<String>,
}

fn resolve_config(args: &Args) -> Result<SiteConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(base) = &args.base {
        config.history.base = base.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        base = %config.history.base,
        info_enabled = config.info.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(&shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
