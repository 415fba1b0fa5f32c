//! Navigation route table.
//!
//! # Data Flow
//! ```text
//! layout activation
//!     → table.rs (load_routes: built-in table, or configured entries)
//!     → RouteTable { routes: [RouteEntry, ...] }  (ordered, ids unique)
//!     → rendering layer builds menu + active-route highlighting
//!         → matcher.rs (pathname patterns, active route lookup)
//! ```
//!
//! # Design Decisions
//! - The built-in table is a constant; `load_routes` allocates a fresh copy
//! - Order is menu order and never changes after construction
//! - No mutation API: a new table replaces the old one wholesale

pub mod entry;
pub mod matcher;
pub mod table;

pub use entry::RouteEntry;
pub use matcher::PathnamePattern;
pub use table::{load_routes, RouteTable, BUILTIN_ROUTES};
