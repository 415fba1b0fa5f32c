//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, http, routes produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or log_level)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - RUST_LOG wins over the configured level
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
