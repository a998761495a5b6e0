//! Routing error types.

use thiserror::Error;

/// A route table that breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route `{name}` has path `{path}` which does not start with '/'")]
    InvalidPath { name: String, path: String },

    #[error("route with path `{path}` has an empty name")]
    EmptyName { path: String },

    #[error("duplicate route path `{path}` (routes `{first}` and `{second}`)")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },
}

/// Failure to move the navigation history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("history has no entry at offset {0}")]
    OutOfRange(isize),
}
