//! Page handler: the fallback for every path the API does not own.
//!
//! Resolves the request path through the routing engine and renders the
//! matched view. Unmatched paths get the engine's default no-match page.

use std::time::Instant;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Resolution;
use crate::views::layout;

pub async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    let start_time = Instant::now();
    let method_str = method.to_string();

    if method != Method::GET && method != Method::HEAD {
        metrics::record_request(&method_str, 405, "none", start_time);
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let location = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    match state.router.resolve(location) {
        Resolution::Matched(route) => {
            tracing::debug!(path = %uri.path(), route = route.name, "Route matched");
            let ctx = state.router.render_context(Some(route.name));
            let html = route.component.render(&ctx);
            metrics::record_request(&method_str, 200, route.name, start_time);
            Html(html).into_response()
        }
        Resolution::NoMatch { path } => {
            tracing::debug!(path = %path, "No route matched");
            metrics::record_route_miss();
            metrics::record_request(&method_str, 404, "none", start_time);
            let ctx = state.router.render_context(None);
            (StatusCode::NOT_FOUND, Html(layout::not_found(uri.path(), &ctx))).into_response()
        }
    }
}
