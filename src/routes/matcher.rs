//! Pathname matching.
//!
//! # Responsibilities
//! - Classify a pathname as root, static segment, or `[param]` segment
//! - Extract the first path segment below a base path
//!
//! # Design Decisions
//! - Segment matching is case-sensitive
//! - A parameter accepts any non-empty segment
//! - No regex; a pathname is a single segment

use std::fmt;

/// Parsed form of a `RouteEntry::pathname`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathnamePattern {
    /// Empty pathname; matches the base path itself.
    Root,
    /// Literal segment.
    Static(String),
    /// `[name]` segment; matches any non-empty segment.
    Param(String),
}

impl PathnamePattern {
    pub fn parse(pathname: &str) -> Self {
        if pathname.is_empty() {
            return PathnamePattern::Root;
        }
        match pathname
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(name) if !name.is_empty() => PathnamePattern::Param(name.to_string()),
            _ => PathnamePattern::Static(pathname.to_string()),
        }
    }

    /// Returns true if `segment` (no slashes) satisfies this pattern.
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            PathnamePattern::Root => segment.is_empty(),
            PathnamePattern::Static(s) => s == segment,
            PathnamePattern::Param(_) => !segment.is_empty(),
        }
    }

    /// Parameter name, for `[name]` segments.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PathnamePattern::Param(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for PathnamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathnamePattern::Root => Ok(()),
            PathnamePattern::Static(s) => write!(f, "{}", s),
            PathnamePattern::Param(name) => write!(f, "[{}]", name),
        }
    }
}

/// First segment of `path` below `base`.
///
/// `None` if `path` does not live under `base`. The base itself yields the
/// empty segment. Any `?query` or `#fragment` is ignored.
pub fn first_segment<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let base = base.trim_end_matches('/');
    let rest = path.strip_prefix(base)?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    let rest = rest.trim_start_matches('/');
    Some(rest.split('/').next().unwrap_or(""))
}
