//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → AppConfig::route_table() → RouteTable
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → new config sent to the HTTP server
//!     → atomic swap of the shared RouteTable
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; an empty file is a valid config
//! - No `[[routes]]` section means the built-in table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, ObservabilityConfig, ServerConfig};
pub use validation::{validate_config, validate_routes, ValidationError};
pub use watcher::ConfigWatcher;
