//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Own the route table and the history strategy
//! - Resolve a location (path or name) to a matched route
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) path scan; the table holds a handful of routes
//! - Explicit NoMatch rather than silent default

use crate::routing::matcher::{decode_path, normalize_path, Location};
use crate::routing::history::WebHistory;
use crate::routing::table::{RouteDefinition, RouteSummary, RouteTable};
use crate::views::{same_view, NavLink, RenderContext, View};

/// A route selected for a location.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub name: &'static str,
    /// Canonical route path (as authored in the table).
    pub path: &'static str,
    pub component: &'static dyn View,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl RouteMatch {
    fn new(definition: &RouteDefinition, location: Location<'_>) -> Self {
        Self {
            name: definition.name,
            path: definition.path,
            component: definition.component,
            query: location.query.map(str::to_string),
            fragment: location.fragment.map(str::to_string),
        }
    }
}

impl PartialEq for RouteMatch {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.path == other.path
            && same_view(self.component, other.component)
            && self.query == other.query
            && self.fragment == other.fragment
    }
}

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Matched(RouteMatch),
    /// No route claims this path. Carries the normalised in-app path, or the
    /// raw location when it lies outside the history base.
    NoMatch { path: String },
}

impl Resolution {
    pub fn route(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    /// In-app path of the resolved location.
    pub fn path(&self) -> &str {
        match self {
            Resolution::Matched(route) => route.path,
            Resolution::NoMatch { path } => path.as_str(),
        }
    }
}

/// Navigation engine handle.
///
/// Built once at start-up and shared by reference (usually `Arc<Router>`).
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    history: WebHistory,
}

impl Router {
    pub fn new(table: RouteTable, history: WebHistory) -> Self {
        Self { table, history }
    }

    /// Resolve a full location (including the history base).
    ///
    /// The path part may be percent-encoded, as it arrives on the wire.
    pub fn resolve(&self, location: &str) -> Resolution {
        let parsed = Location::parse(location);
        let path = decode_path(parsed.path);
        match self.history.strip_base(&path) {
            Some(in_app) => self.resolve_decoded(&in_app, parsed),
            None => {
                tracing::trace!(location = %location, "Location outside history base");
                Resolution::NoMatch {
                    path: path.into_owned(),
                }
            }
        }
    }

    /// Resolve an in-app path (base already removed).
    pub fn resolve_path(&self, path: &str) -> Resolution {
        let location = Location::parse(path);
        let decoded = decode_path(location.path);
        self.resolve_decoded(&decoded, location)
    }

    fn resolve_decoded(&self, path: &str, location: Location<'_>) -> Resolution {
        match self.table.find_by_path(path) {
            Some(definition) => Resolution::Matched(RouteMatch::new(definition, location)),
            None => Resolution::NoMatch {
                path: normalize_path(path),
            },
        }
    }

    /// Resolve a named route.
    pub fn resolve_name(&self, name: &str) -> Option<RouteMatch> {
        self.table.find_by_name(name).map(|definition| {
            RouteMatch::new(
                definition,
                Location {
                    path: definition.path,
                    query: None,
                    fragment: None,
                },
            )
        })
    }

    /// Full href of a named route.
    pub fn href(&self, name: &str) -> Option<String> {
        self.table
            .find_by_name(name)
            .map(|definition| self.history.create_href(definition.path))
    }

    /// Route definitions in table order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.table.iter()
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }

    /// Route listing with hrefs, in table order.
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.table
            .iter()
            .map(|definition| RouteSummary {
                path: definition.path,
                name: definition.name,
                view: definition.component.id(),
                href: self.history.create_href(definition.path),
            })
            .collect()
    }

    /// Navigation links for rendering, marking `current` as active.
    pub fn render_context(&self, current: Option<&'static str>) -> RenderContext {
        RenderContext {
            nav: self
                .table
                .iter()
                .map(|definition| NavLink {
                    name: definition.name,
                    label: definition.component.nav_label(),
                    href: self.history.create_href(definition.path),
                })
                .collect(),
            current,
        }
    }
}
