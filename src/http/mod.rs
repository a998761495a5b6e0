//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → /api/*, /info → api.rs (JSON)
//!     → everything else → pages.rs (routing engine → view HTML or 404)
//!     → response.rs (API error mapping)
//!     → Send to client
//! ```

pub mod api;
pub mod pages;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
