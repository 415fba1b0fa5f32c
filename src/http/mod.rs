//! HTTP surface for the route table.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request id, tracing, timeout)
//!     → handlers.rs (read current RouteTable from the shared ArcSwap)
//!     → JSON response
//!
//! Config reload:
//!     ConfigWatcher → mpsc → HttpServer::spawn_reloader → ArcSwap::store
//! ```

pub mod handlers;
pub mod server;

pub use handlers::ApiError;
pub use server::{build_router, AppState, HttpServer};
