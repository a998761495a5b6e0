//! Route definitions and the validated, ordered route table.

use serde::Serialize;

use crate::routing::error::RouteTableError;
use crate::routing::matcher::{ExactPathMatcher, Matcher};
use crate::views::View;

/// Association between a URL path and the view to render.
#[derive(Debug, Clone, Copy)]
pub struct RouteDefinition {
    /// URL path pattern, unique across the table.
    pub path: &'static str,
    /// Symbolic identifier for programmatic navigation.
    pub name: &'static str,
    /// The view bound to this route. Owned by the views module.
    pub component: &'static dyn View,
}

/// Serializable description of a route, as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: &'static str,
    pub name: &'static str,
    pub view: &'static str,
    pub href: String,
}

#[derive(Debug)]
struct CompiledRoute {
    definition: RouteDefinition,
    matcher: ExactPathMatcher,
}

/// Ordered, immutable list of routes.
///
/// Construction checks that paths and names are unique; after that the
/// table never changes and can be read from any thread.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Validate and compile route definitions, preserving their order.
    pub fn new(
        definitions: impl IntoIterator<Item = RouteDefinition>,
    ) -> Result<Self, RouteTableError> {
        let mut routes: Vec<CompiledRoute> = Vec::new();

        for definition in definitions {
            if !definition.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    name: definition.name.to_string(),
                    path: definition.path.to_string(),
                });
            }
            if definition.name.trim().is_empty() {
                return Err(RouteTableError::EmptyName {
                    path: definition.path.to_string(),
                });
            }

            let matcher = ExactPathMatcher::new(definition.path);
            if let Some(existing) = routes
                .iter()
                .find(|r| r.matcher.expected() == matcher.expected())
            {
                return Err(RouteTableError::DuplicatePath {
                    path: definition.path.to_string(),
                    first: existing.definition.name.to_string(),
                    second: definition.name.to_string(),
                });
            }
            if routes.iter().any(|r| r.definition.name == definition.name) {
                return Err(RouteTableError::DuplicateName {
                    name: definition.name.to_string(),
                });
            }

            routes.push(CompiledRoute { definition, matcher });
        }

        Ok(Self { routes })
    }

    /// First route whose path matches, in table order.
    pub fn find_by_path(&self, path: &str) -> Option<&RouteDefinition> {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(path))
            .map(|r| &r.definition)
    }

    /// Route with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes
            .iter()
            .find(|r| r.definition.name == name)
            .map(|r| &r.definition)
    }

    /// Definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter().map(|r| &r.definition)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{same_view, GAME, MY_PROJECTS, PERSONAL_INFO};

    fn def(path: &'static str, name: &'static str) -> RouteDefinition {
        RouteDefinition { path, name, component: &PERSONAL_INFO }
    }

    #[test]
    fn test_preserves_order() {
        let table = RouteTable::new([
            def("/b", "b"),
            def("/a", "a"),
            def("/c", "c"),
        ])
        .unwrap();
        let names: Vec<_> = table.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = RouteTable::new([def("/a", "one"), def("/A/", "two")]).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePath {
                path: "/A/".into(),
                first: "one".into(),
                second: "two".into(),
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = RouteTable::new([def("/a", "same"), def("/b", "same")]).unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName { name: "same".into() });
    }

    #[test]
    fn test_rejects_relative_path_and_empty_name() {
        assert!(matches!(
            RouteTable::new([def("a", "a")]),
            Err(RouteTableError::InvalidPath { .. })
        ));
        assert!(matches!(
            RouteTable::new([def("/a", " ")]),
            Err(RouteTableError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_lookup() {
        let table = RouteTable::new([
            RouteDefinition { path: "/", name: "home", component: &PERSONAL_INFO },
            RouteDefinition { path: "/projects", name: "projects", component: &MY_PROJECTS },
        ])
        .unwrap();

        let route = table.find_by_path("/projects/").unwrap();
        assert_eq!(route.name, "projects");
        assert!(same_view(route.component, &MY_PROJECTS));
        assert!(!same_view(route.component, &GAME));

        assert_eq!(table.find_by_name("home").map(|r| r.path), Some("/"));
        assert!(table.find_by_path("/game").is_none());
        assert!(table.find_by_name("game").is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new(std::iter::empty()).unwrap();
        assert!(table.is_empty());
        assert!(table.find_by_path("/").is_none());
    }
}
