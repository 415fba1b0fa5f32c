//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Route ids unique and non-empty
//! - Pathnames are single segments with well-formed `[param]` syntax
//! - Server and observability values parse and are in range
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: &AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config (or reloaded config) is accepted

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routes::{PathnamePattern, RouteEntry};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate route id '{id}' (entries #{first} and #{second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("route '{id}': pathname '{pathname}' must be a single segment")]
    NestedPathname { id: String, pathname: String },

    #[error("route '{id}': malformed parameter segment '{pathname}'")]
    MalformedParam { id: String, pathname: String },

    #[error("route id '{id}' is reserved by the HTTP API")]
    ReservedId { id: String },

    #[error("routes list is present but empty")]
    EmptyTable,

    #[error("base_path '{0}' must start with '/'")]
    InvalidBasePath(String),

    #[error("bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Ids that collide with static paths under `/routes/`.
pub const RESERVED_IDS: [&str; 1] = ["active"];

/// Validate a full configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let server = &config.server;
    if !server.base_path.starts_with('/') {
        errors.push(ValidationError::InvalidBasePath(server.base_path.clone()));
    }
    if server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(server.bind_address.clone()));
    }
    if server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let obs = &config.observability;
    if obs.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(obs.log_level.clone()));
    }
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(obs.metrics_address.clone()));
    }

    if let Some(routes) = &config.routes {
        if let Err(route_errors) = validate_routes(routes) {
            errors.extend(route_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate an ordered list of route entries.
pub fn validate_routes(routes: &[RouteEntry]) -> Result<(), Vec<ValidationError>> {
    if routes.is_empty() {
        return Err(vec![ValidationError::EmptyTable]);
    }

    let mut errors = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut reported: HashSet<&str> = HashSet::new();

    for (index, route) in routes.iter().enumerate() {
        if route.id.is_empty() {
            errors.push(ValidationError::EmptyId { index });
        } else if RESERVED_IDS.contains(&route.id.as_str()) {
            errors.push(ValidationError::ReservedId {
                id: route.id.clone(),
            });
        } else if let Some(&first) = seen.get(route.id.as_str()) {
            if reported.insert(route.id.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    id: route.id.clone(),
                    first,
                    second: index,
                });
            }
        } else {
            seen.insert(route.id.as_str(), index);
        }

        if let Some(err) = check_pathname(route) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_pathname(route: &RouteEntry) -> Option<ValidationError> {
    let pathname = &route.pathname;
    if pathname.contains('/') {
        return Some(ValidationError::NestedPathname {
            id: route.id.clone(),
            pathname: pathname.clone(),
        });
    }
    if !pathname.contains(['[', ']']) {
        return None;
    }
    // Brackets are only allowed around a whole, non-empty parameter name.
    let well_formed = match PathnamePattern::parse(pathname) {
        PathnamePattern::Param(name) => !name.contains(['[', ']']),
        _ => false,
    };
    if well_formed {
        None
    } else {
        Some(ValidationError::MalformedParam {
            id: route.id.clone(),
            pathname: pathname.clone(),
        })
    }
}
