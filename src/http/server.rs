//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Hold the current route table behind an ArcSwap
//! - Apply reloaded configurations
//! - Bind server to listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers::{get_active_route, get_route, get_routes, health};
use crate::observability::metrics;
use crate::routes::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    table: Arc<ArcSwap<RouteTable>>,
    base_path: Arc<str>,
}

impl AppState {
    pub fn new(table: RouteTable, base_path: &str) -> Self {
        metrics::set_table_size(table.len());
        Self {
            table: Arc::new(ArcSwap::from_pointee(table)),
            base_path: Arc::from(base_path),
        }
    }

    /// Snapshot of the current table.
    pub fn table(&self) -> Arc<RouteTable> {
        self.table.load_full()
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Swap in a new table. In-flight requests keep their snapshot.
    pub fn replace_table(&self, table: RouteTable) {
        metrics::set_table_size(table.len());
        self.table.store(Arc::new(table));
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/routes", get(get_routes))
        .route("/routes/active", get(get_active_route))
        .route("/routes/{id}", get(get_route))
        .route("/health", get(health))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// HTTP server for the route table.
pub struct HttpServer {
    router: Router,
    state: AppState,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new(config.route_table(), &config.server.base_path);
        let router = build_router(
            state.clone(),
            Duration::from_secs(config.server.request_timeout_secs),
        );
        Self {
            router,
            state,
            config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply every configuration received on `updates` to the shared table.
    ///
    /// Server settings are read once at startup; only routes are reloaded.
    pub fn spawn_reloader(&self, mut updates: mpsc::UnboundedReceiver<AppConfig>) -> JoinHandle<()> {
        let state = self.state.clone();
        let base_path = self.config.server.base_path.clone();
        tokio::spawn(async move {
            while let Some(config) = updates.recv().await {
                if config.server.base_path != base_path {
                    tracing::warn!(
                        current = %base_path,
                        requested = %config.server.base_path,
                        "base_path change requires a restart"
                    );
                }
                let table = config.route_table();
                tracing::info!(routes = table.len(), "Route table reloaded");
                state.replace_table(table);
                metrics::record_reload("applied");
            }
        })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.state.table().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
