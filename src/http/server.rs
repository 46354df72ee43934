//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the three page routes
//! - Wrap each page handler with the path gate
//! - Wire up middleware (request ID, tracing, metrics)
//! - Bind server to listener and serve until shutdown

use axum::{
    middleware,
    routing::{any, MethodRouter},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::WikiConfig;
use crate::http::handlers;
use crate::http::middleware::{metrics::track_metrics, path_gate};
use crate::http::request::{request_span, MakeRequestUuidV4};
use crate::http::response;
use crate::lifecycle::signals::shutdown_signal;
use crate::pages::PageStore;
use crate::render::Renderer;
use crate::routing::Action;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<PageStore>,
    pub renderer: Arc<Renderer>,
    pub expose_internal_errors: bool,
}

impl AppState {
    pub fn new(config: &WikiConfig, renderer: Renderer) -> Self {
        Self {
            store: Arc::new(PageStore::new(config.pages.directory.clone())),
            renderer: Arc::new(renderer),
            expose_internal_errors: config.server.expose_internal_errors,
        }
    }
}

/// HTTP server for the wiki.
pub struct WikiServer {
    router: Router,
    config: WikiConfig,
}

impl WikiServer {
    /// Create a server that renders with `renderer` and stores pages where
    /// `config` says.
    pub fn new(config: WikiConfig, renderer: Renderer) -> Self {
        let state = AppState::new(&config, renderer);
        let router = build_router(state);
        Self { router, config }
    }

    /// Run until Ctrl+C or SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run until `signal` completes, then drain in-flight requests.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            pages = %self.config.pages.directory.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// The fully layered router, for driving the app without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    let pages = Action::ALL
        .into_iter()
        .fold(Router::<AppState>::new(), |router, action| router.merge(page_route(action)));

    pages
        .fallback(|| async { response::not_found() })
        .with_state(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Register `action`'s handler at its prefix, behind the path gate.
fn page_route(action: Action) -> Router<AppState> {
    let handler: MethodRouter<AppState> = match action {
        Action::View => any(handlers::view),
        Action::Edit => any(handlers::edit),
        Action::Save => any(handlers::save),
    };
    let prefix = format!("/{action}/");

    Router::new()
        .route(&prefix, handler.clone())
        .route(&format!("{prefix}{{*rest}}"), handler)
        .route_layer(middleware::from_fn_with_state(action, path_gate))
}
