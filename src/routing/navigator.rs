//! Per-client navigation state.
//!
//! The route table is shared and immutable; the history stack is not. Each
//! client session owns one `Navigator` holding its entries and position.

use std::sync::Arc;

use crate::routing::error::NavigationError;
use crate::routing::matcher::Location;
use crate::routing::router::{Resolution, Router};

/// Where to navigate: by in-app path or by route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Path(String),
    Name(String),
}

impl NavigationTarget {
    pub fn path(path: impl Into<String>) -> Self {
        NavigationTarget::Path(path.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        NavigationTarget::Name(name.into())
    }
}

/// One entry of the history stack.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// In-app path.
    pub path: String,
    /// In-app path with the query and fragment navigated to.
    pub full_path: String,
    /// Full href including the history base.
    pub href: String,
    pub resolution: Resolution,
}

/// Browser-like history over a shared router.
#[derive(Debug)]
pub struct Navigator {
    router: Arc<Router>,
    entries: Vec<HistoryEntry>,
    position: usize,
}

impl Navigator {
    /// Start a session at the root path.
    pub fn new(router: Arc<Router>) -> Self {
        let initial = entry_for(&router, router.resolve_path("/"), None, None);
        Self {
            router,
            entries: vec![initial],
            position: 0,
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.position]
    }

    /// Navigate to `target`, dropping any forward entries.
    pub fn push(&mut self, target: NavigationTarget) -> Result<&HistoryEntry, NavigationError> {
        let entry = self.entry_for_target(&target)?;
        tracing::debug!(path = %entry.path, matched = entry.resolution.is_match(), "Navigation push");
        self.entries.truncate(self.position + 1);
        self.entries.push(entry);
        self.position = self.entries.len() - 1;
        Ok(self.current())
    }

    /// Navigate to `target`, replacing the current entry.
    pub fn replace(&mut self, target: NavigationTarget) -> Result<&HistoryEntry, NavigationError> {
        let entry = self.entry_for_target(&target)?;
        tracing::debug!(path = %entry.path, matched = entry.resolution.is_match(), "Navigation replace");
        self.entries[self.position] = entry;
        Ok(self.current())
    }

    /// Move `delta` entries through history.
    pub fn go(&mut self, delta: isize) -> Result<&HistoryEntry, NavigationError> {
        let target = self
            .position
            .checked_add_signed(delta)
            .filter(|&p| p < self.entries.len())
            .ok_or(NavigationError::OutOfRange(delta))?;
        self.position = target;
        Ok(self.current())
    }

    /// Step back one entry; stays put at the start of history.
    pub fn back(&mut self) -> &HistoryEntry {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Step forward one entry; stays put at the end of history.
    pub fn forward(&mut self) -> &HistoryEntry {
        if self.position + 1 < self.entries.len() {
            self.position += 1;
        }
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_for_target(&self, target: &NavigationTarget) -> Result<HistoryEntry, NavigationError> {
        match target {
            NavigationTarget::Path(path) => {
                let location = Location::parse(path);
                let resolution = self.router.resolve_path(path);
                Ok(entry_for(&self.router, resolution, location.query, location.fragment))
            }
            NavigationTarget::Name(name) => self
                .router
                .resolve_name(name)
                .map(|route| entry_for(&self.router, Resolution::Matched(route), None, None))
                .ok_or_else(|| NavigationError::UnknownRoute(name.clone())),
        }
    }
}

fn entry_for(
    router: &Router,
    resolution: Resolution,
    query: Option<&str>,
    fragment: Option<&str>,
) -> HistoryEntry {
    let path = resolution.path().to_string();
    let mut full_path = path.clone();
    if let Some(query) = query {
        full_path.push('?');
        full_path.push_str(query);
    }
    if let Some(fragment) = fragment {
        full_path.push('#');
        full_path.push_str(fragment);
    }
    HistoryEntry {
        href: router.history().create_href(&full_path),
        full_path,
        path,
        resolution,
    }
}
