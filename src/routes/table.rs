//! Ordered route table and the built-in provider.
//!
//! # Responsibilities
//! - Hold the built-in navigation entries
//! - Build tables from configured entries (validated)
//! - Lookups by id and by current URL path
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Insertion order is menu order
//! - Serializes as `{ "routes": [...] }`

use serde::Serialize;

use crate::config::validation::{validate_routes, ValidationError};
use crate::routes::entry::RouteEntry;
use crate::routes::matcher::{first_segment, PathnamePattern};

/// Built-in menu as `(id, pathname)` pairs, in display order.
pub const BUILTIN_ROUTES: [(&str, &str); 7] = [
    ("chat", "[chatId]"),
    ("workspace", "workspace"),
    ("library", "library"),
    ("notes", "notes"),
    ("playground", "playground"),
    ("tools", "tools"),
    ("admin", "admin"),
];

/// Returns a fresh copy of the built-in route table.
///
/// Pure and total: every call yields the same seven enabled entries in the
/// same order.
pub fn load_routes() -> RouteTable {
    RouteTable {
        routes: BUILTIN_ROUTES
            .iter()
            .map(|(id, pathname)| RouteEntry::new(*id, *pathname))
            .collect(),
    }
}

/// An ordered sequence of route entries with pairwise distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from configured entries, rejecting duplicates and
    /// malformed pathnames.
    pub fn from_entries(routes: Vec<RouteEntry>) -> Result<Self, Vec<ValidationError>> {
        validate_routes(&routes)?;
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<RouteEntry> {
        self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Menu position of an entry.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.id.as_str())
    }

    /// Entries the renderer may navigate to.
    pub fn enabled(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().filter(|r| !r.disabled)
    }

    /// Find the entry that is active for `path` under `base`.
    ///
    /// Root and static entries win over parameter entries, so `/workspace`
    /// resolves to `workspace` even though `[chatId]` would also accept it.
    /// Returns `None` when `path` is outside `base` or nothing matches.
    pub fn active(&self, base: &str, path: &str) -> Option<&RouteEntry> {
        let segment = first_segment(base, path)?;

        let (params, fixed): (Vec<_>, Vec<_>) = self
            .routes
            .iter()
            .map(|r| (r, r.pattern()))
            .partition(|(_, p)| matches!(p, PathnamePattern::Param(_)));

        fixed
            .into_iter()
            .chain(params)
            .find(|(_, p)| p.matches(segment))
            .map(|(r, _)| r)
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_load_routes_is_idempotent() {
        assert_eq!(load_routes(), load_routes());
    }

    #[test]
    fn test_builtin_table_contents() {
        let table = load_routes();
        assert_eq!(table.len(), 7);

        let ids: Vec<_> = table.ids().collect();
        assert_eq!(
            ids,
            ["chat", "workspace", "library", "notes", "playground", "tools", "admin"]
        );

        let pathnames: Vec<_> = table.iter().map(|r| r.pathname.as_str()).collect();
        assert_eq!(
            pathnames,
            ["[chatId]", "workspace", "library", "notes", "playground", "tools", "admin"]
        );

        let unique: HashSet<_> = table.ids().collect();
        assert_eq!(unique.len(), table.len());
        assert!(table.iter().all(|r| !r.disabled));
    }

    #[test]
    fn test_first_and_last_entries() {
        let table = load_routes();
        assert_eq!(table.routes()[0], RouteEntry::new("chat", "[chatId]"));
        assert_eq!(table.routes()[6], RouteEntry::new("admin", "admin"));
    }

    #[test]
    fn test_serializes_as_layout_data() {
        let json = serde_json::to_value(load_routes()).unwrap();
        assert_eq!(json["routes"].as_array().unwrap().len(), 7);
        assert_eq!(
            json["routes"][0],
            serde_json::json!({ "id": "chat", "pathname": "[chatId]", "disabled": false })
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let table = load_routes();
        assert_eq!(table.get("notes").unwrap().pathname, "notes");
        assert_eq!(table.position("tools"), Some(5));
        assert!(table.get("settings").is_none());
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let errors = RouteTable::from_entries(vec![
            RouteEntry::new("a", "a"),
            RouteEntry::new("a", "b"),
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_enabled_skips_disabled() {
        let table = RouteTable::from_entries(vec![
            RouteEntry::new("a", "a"),
            RouteEntry::new("b", "b").with_disabled(true),
        ])
        .unwrap();
        let enabled: Vec<_> = table.enabled().map(|r| r.id.as_str()).collect();
        assert_eq!(enabled, ["a"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_active_prefers_static_segments() {
        let table = load_routes();
        assert_eq!(table.active("/", "/workspace/models").unwrap().id, "workspace");
        assert_eq!(table.active("/", "/admin").unwrap().id, "admin");
        assert_eq!(table.active("/", "/c0ffee").unwrap().id, "chat");
    }

    #[test]
    fn test_active_ignores_query_and_fragment() {
        let table = load_routes();
        assert_eq!(table.active("/", "/notes?tab=1").unwrap().id, "notes");
        assert_eq!(table.active("/", "/notes#x").unwrap().id, "notes");
        assert_eq!(table.active("/", "/c0ffee?model=x").unwrap().id, "chat");
    }

    #[test]
    fn test_active_root_path() {
        let table = load_routes();
        // no root entry in the built-in table
        assert!(table.active("/", "/").is_none());

        let table = RouteTable::from_entries(vec![
            RouteEntry::new("home", ""),
            RouteEntry::new("docs", "docs"),
        ])
        .unwrap();
        assert_eq!(table.active("/app", "/app").unwrap().id, "home");
        assert_eq!(table.active("/app", "/app/docs").unwrap().id, "docs");
        assert!(table.active("/app", "/other/docs").is_none());
    }
}
