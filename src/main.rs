//! Page Wiki Server
//!
//! Serves text pages that can be viewed, edited and saved over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ router ──▶ path gate ──▶ handler
//!                                               │             │
//!                                          404 on bad path    ├─▶ page store (<title>.txt)
//!                                                             └─▶ renderer (view.html / edit.html)
//!     Client Response
//!     ◀────────────── HTML page, 302 redirect, or 500
//! ```
//!
//! With no arguments the server listens on port 8080, reads templates from
//! `templates/` and keeps pages in the working directory.

use clap::Parser;
use std::path::PathBuf;

use wiki_server::config::{load_config, ObservabilityConfig, WikiConfig};
use wiki_server::lifecycle::startup;
use wiki_server::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "wiki-server")]
#[command(about = "Minimal page-editing web server", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener address, overriding the config file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_config(path),
        None => Ok(WikiConfig::default()),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);

    tracing::info!("wiki-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        pages = %config.pages.directory.display(),
        templates = %config.templates.directory.display(),
        "Configuration loaded"
    );

    let server = match startup::prepare(config).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let listener = match startup::bind(server.config()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
