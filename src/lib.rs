//! Portfolio website: a static route table, its navigation engine, and the
//! HTTP server that renders the routed pages.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod system;
pub mod views;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{build, Router};
