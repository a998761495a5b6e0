//! The site's route table.

use crate::routing::history::WebHistory;
use crate::routing::router::Router;
use crate::routing::table::{RouteDefinition, RouteTable};
use crate::views::{GAME, MY_PROJECTS, PERSONAL_INFO};

/// Every page of the site, in match order.
pub static ROUTES: [RouteDefinition; 3] = [
    RouteDefinition {
        path: "/",
        name: "home",
        component: &PERSONAL_INFO,
    },
    RouteDefinition {
        path: "/projects",
        name: "projects",
        component: &MY_PROJECTS,
    },
    RouteDefinition {
        path: "/game",
        name: "game",
        component: &GAME,
    },
];

/// Build the navigation engine for the site, mounted at `/`.
pub fn build() -> Router {
    build_with_base("/")
}

/// Build the navigation engine mounted under `base`.
///
/// # Panics
/// If the static route table is malformed. That is a defect in [`ROUTES`],
/// caught by the tests below, never a runtime condition.
pub fn build_with_base(base: &str) -> Router {
    let table = match RouteTable::new(ROUTES.iter().copied()) {
        Ok(table) => table,
        Err(e) => panic!("static route table is invalid: {e}"),
    };
    Router::new(table, WebHistory::new(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{same_view, View};

    #[test]
    fn test_static_table_is_valid() {
        assert!(RouteTable::new(ROUTES.iter().copied()).is_ok());
    }

    #[test]
    fn test_every_path_resolves_to_one_route() {
        let router = build();
        let expected: [(&str, &str, &dyn View); 3] = [
            ("/", "home", &PERSONAL_INFO),
            ("/projects", "projects", &MY_PROJECTS),
            ("/game", "game", &GAME),
        ];
        for (path, name, view) in expected {
            let matches: Vec<_> = router
                .routes()
                .filter(|r| r.path.eq_ignore_ascii_case(path))
                .collect();
            assert_eq!(matches.len(), 1, "exactly one definition for {path}");

            let resolution = router.resolve(path);
            let route = resolution.route().unwrap();
            assert_eq!(route.name, name);
            assert!(same_view(route.component, view));
        }
    }

    #[test]
    fn test_name_and_path_navigation_agree() {
        let router = build();
        for (name, path) in [("home", "/"), ("projects", "/projects"), ("game", "/game")] {
            let by_name = router.resolve_name(name).unwrap();
            let by_path = router.resolve(path);
            assert_eq!(by_path.route(), Some(&by_name));
            assert_eq!(router.href(name).as_deref(), Some(path));
        }
    }

    #[test]
    fn test_paths_and_names_distinct() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in ROUTES.iter().skip(i + 1) {
                assert_ne!(a.path, b.path);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_default_history() {
        let router = build();
        assert_eq!(router.history().base(), "/");
    }
}
