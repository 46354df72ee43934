//! Startup orchestration.
//!
//! # Responsibilities
//! - Parse templates and build the server
//! - Optionally seed and read back the sample page
//! - Start the metrics exporter when enabled
//! - Bind the listener last
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use metrics_exporter_prometheus::BuildError;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::WikiConfig;
use crate::http::WikiServer;
use crate::observability::metrics::init_metrics;
use crate::pages::{Page, PageStore, StoreError};
use crate::render::{RenderError, Renderer};

/// Title of the page written by `seed_sample_page`.
pub const SAMPLE_TITLE: &str = "TestPage";

/// Body of the page written by `seed_sample_page`.
pub const SAMPLE_BODY: &str = "this is a sample Page.";

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load templates: {0}")]
    Templates(#[from] RenderError),

    #[error("failed to seed sample page: {0}")]
    Seed(#[from] StoreError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("invalid address `{addr}`: {source}")]
    Address {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Save the sample page, then load it back.
pub async fn seed_sample_page(store: &PageStore) -> Result<Page, StoreError> {
    store.save(&Page::new(SAMPLE_TITLE, SAMPLE_BODY)).await?;
    let page = store.load(SAMPLE_TITLE).await?;
    tracing::info!(
        title = SAMPLE_TITLE,
        body = %String::from_utf8_lossy(&page.body),
        "Sample page seeded"
    );
    Ok(page)
}

/// Build everything the server needs, in dependency order.
pub async fn prepare(config: WikiConfig) -> Result<WikiServer, StartupError> {
    let renderer = Renderer::from_dir(&config.templates.directory)?;
    tracing::info!(
        directory = %config.templates.directory.display(),
        "Templates loaded"
    );

    if config.pages.seed_sample_page {
        seed_sample_page(&PageStore::new(config.pages.directory.clone())).await?;
    }

    if config.observability.metrics_enabled {
        let addr = parse_addr(&config.observability.metrics_address)?;
        init_metrics(addr)?;
    }

    Ok(WikiServer::new(config, renderer))
}

/// Bind the configured listener address.
pub async fn bind(config: &WikiConfig) -> Result<TcpListener, StartupError> {
    let addr = parse_addr(&config.listener.bind_address)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!(address = %addr, "Listener bound");
    Ok(listener)
}

fn parse_addr(addr: &str) -> Result<SocketAddr, StartupError> {
    addr.parse().map_err(|source| StartupError::Address {
        addr: addr.to_string(),
        source,
    })
}
