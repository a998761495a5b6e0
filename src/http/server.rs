//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, CORS)
//! - Bind server to listener
//! - Dispatch page requests to the routing engine

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::http::api::{list_routes, resolve, system_info};
use crate::http::pages::page_handler;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routing::{self, Router as SiteRouter};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<SiteRouter>,
    pub config: Arc<SiteConfig>,
}

/// HTTP server for the portfolio site.
pub struct HttpServer {
    app: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the site's route table.
    pub fn new(config: SiteConfig) -> Self {
        let router = Arc::new(routing::build_with_base(&config.history.base));
        Self::with_router(config, router)
    }

    /// Create a server around an already-built routing engine.
    pub fn with_router(config: SiteConfig, router: Arc<SiteRouter>) -> Self {
        let state = AppState {
            router,
            config: Arc::new(config),
        };
        let app = Self::build_router(&state.config, state.clone());
        Self { app, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut api = Router::new()
            .route("/api/routes", get(list_routes))
            .route("/api/resolve", get(resolve));
        if config.info.enabled {
            api = api.route("/info", get(system_info));
        }
        if config.cors.allow_any_origin {
            api = api.layer(CorsLayer::permissive());
        }

        Router::new()
            .merge(api)
            .fallback(page_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.listener.request_timeout_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The Axum application, for in-process testing.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base = %self.state.router.history().base(),
            routes = self.state.router.routes().count(),
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.state.config
    }
}
