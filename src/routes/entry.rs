//! A single navigation destination.

use serde::{Deserialize, Serialize};

use crate::routes::matcher::PathnamePattern;

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RouteEntry {
    /// Stable key, unique within a table.
    pub id: String,

    /// Path segment relative to the base path. Empty for the root entry,
    /// `[name]` for a parameter segment.
    pub pathname: String,

    /// Shown but not navigable when set.
    #[serde(default)]
    pub disabled: bool,
}

impl RouteEntry {
    /// Create an enabled entry.
    pub fn new(id: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pathname: pathname.into(),
            disabled: false,
        }
    }

    /// Builder-style toggle for the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn pattern(&self) -> PathnamePattern {
        PathnamePattern::parse(&self.pathname)
    }

    /// True if the pathname is a `[param]` segment.
    pub fn is_dynamic(&self) -> bool {
        matches!(self.pattern(), PathnamePattern::Param(_))
    }
}
