//! Navigation route table for the application layout.
//!
//! The core is [`load_routes`], a pure provider of the built-in menu. Around
//! it sit an optional TOML configuration layer, an HTTP surface serving the
//! table as JSON, and the usual logging and metrics plumbing.

pub mod config;
pub mod http;
pub mod observability;
pub mod routes;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use routes::{load_routes, RouteEntry, RouteTable};
