//! Route matching logic.
//!
//! # Responsibilities
//! - Split a location into path, query and fragment
//! - Normalise paths before comparison
//! - Match a normalised path against a route path
//!
//! # Design Decisions
//! - Path matching is case-insensitive
//! - A single trailing slash is ignored ("/projects/" == "/projects")
//! - Query string and fragment never take part in matching
//! - Percent-encoded paths are decoded before matching ("/%67ame" == "/game")
//! - No regex; routes are static strings

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Trait for matching an in-app path against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// A location broken into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> Location<'a> {
    /// Split `path?query#fragment`.
    pub fn parse(location: &'a str) -> Self {
        let (rest, fragment) = match location.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (location, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        Self { path, query, fragment }
    }
}

/// Percent-decode a request path, keeping it as-is when it is not valid UTF-8.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(path))
}

/// Normalise a path for comparison.
///
/// Guarantees a leading `/`, lowercases, and drops one trailing `/` unless the
/// path is the root.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(&path.to_lowercase());
    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// Matches one exact route path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: String,
}

impl ExactPathMatcher {
    /// Create a new exact path matcher.
    /// The route path is normalised once here.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            expected: normalize_path(path.as_ref()),
        }
    }

    /// The normalised path this matcher accepts.
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        normalize_path(Location::parse(path).path) == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/%67ame"), "/game");
        assert_eq!(decode_path("/my%20projects"), "/my projects");
        assert_eq!(decode_path("/projects"), "/projects");
        // Invalid UTF-8 stays encoded
        assert_eq!(decode_path("/%FF"), "/%FF");
    }

    #[test]
    fn test_location_parse() {
        let loc = Location::parse("/projects?tab=rust#top");
        assert_eq!(loc.path, "/projects");
        assert_eq!(loc.query, Some("tab=rust"));
        assert_eq!(loc.fragment, Some("top"));

        let loc = Location::parse("/game#a?b");
        assert_eq!(loc.path, "/game");
        assert_eq!(loc.query, None);
        assert_eq!(loc.fragment, Some("a?b"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("projects"), "/projects");
        assert_eq!(normalize_path("/Projects/"), "/projects");
        assert_eq!(normalize_path("/projects//"), "/projects/");
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactPathMatcher::new("/projects");
        assert!(matcher.matches("/projects"));
        assert!(matcher.matches("/PROJECTS")); // Case insensitive
        assert!(matcher.matches("/projects/"));
        assert!(matcher.matches("/projects?sort=new"));
        assert!(!matcher.matches("/projects//"));
        assert!(!matcher.matches("/projects/rust"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_root_matcher() {
        let matcher = ExactPathMatcher::new("/");
        assert!(matcher.matches("/"));
        assert!(matcher.matches(""));
        assert!(matcher.matches("/#about"));
        assert!(!matcher.matches("/game"));
    }
}
