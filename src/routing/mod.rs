//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location (path?query#fragment) or route name
//!     → history.rs (strip base)
//!     → router.rs (route lookup)
//!     → matcher.rs (normalise & compare)
//!     → Return: RouteMatch or NoMatch
//!
//! Route Compilation (at startup):
//!     routes.rs ROUTES[]
//!     → table.rs (validate unique paths/names, compile matchers)
//!     → Freeze as immutable Router
//!
//! Per client:
//!     navigator.rs (history stack over Arc<Router>)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (table order)
//! - No catch-all route; unmatched paths are an explicit NoMatch

pub mod error;
pub mod history;
pub mod matcher;
pub mod navigator;
pub mod router;
pub mod routes;
pub mod table;

pub use error::{NavigationError, RouteTableError};
pub use history::WebHistory;
pub use navigator::{HistoryEntry, NavigationTarget, Navigator};
pub use router::{Resolution, RouteMatch, Router};
pub use routes::{build, build_with_base, ROUTES};
pub use table::{RouteDefinition, RouteSummary, RouteTable};
