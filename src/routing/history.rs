//! Path-based browser history strategy.
//!
//! Locations are plain paths under a base (no hash fragment routing). The
//! base is kept with a leading and trailing slash: `/`, `/portfolio/`.

/// Web history configuration: where the application is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
}

impl WebHistory {
    /// Create a history strategy mounted at `base`.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        };
        Self { base }
    }

    /// The normalised base path.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Convert a full location into an in-app path.
    ///
    /// Returns `None` when the location lies outside the base.
    pub fn strip_base(&self, location: &str) -> Option<String> {
        if self.base == "/" {
            return Some(if location.starts_with('/') {
                location.to_string()
            } else {
                format!("/{}", location)
            });
        }

        // Matching is case-insensitive, so the mount is too.
        let mount = self.base.trim_end_matches('/');
        let rest = location
            .get(..mount.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(mount))
            .map(|_| &location[mount.len()..])?;
        if rest.is_empty() || rest.starts_with(['?', '#']) {
            Some(format!("/{}", rest))
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            // "/portfolio-old" is not under "/portfolio/"
            None
        }
    }

    /// Convert an in-app path into a full href.
    pub fn create_href(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{}", self.base, path)
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/")
    }
}
