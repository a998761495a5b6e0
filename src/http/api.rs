//! JSON endpoints: route listing, resolution and the system report.

use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::routing::{Resolution, RouteMatch, RouteSummary};
use crate::system::{self, SystemInfo};

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub path: Option<String>,
    pub name: Option<String>,
}

/// Result of `/api/resolve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub matched: bool,
    pub name: Option<String>,
    pub path: String,
    pub view: Option<String>,
    pub href: Option<String>,
}

impl ResolveResponse {
    fn matched(route: &RouteMatch, href: Option<String>) -> Self {
        Self {
            matched: true,
            name: Some(route.name.to_string()),
            path: route.path.to_string(),
            view: Some(route.component.id().to_string()),
            href,
        }
    }

    fn unmatched(path: String) -> Self {
        Self {
            matched: false,
            name: None,
            path,
            view: None,
            href: None,
        }
    }
}

pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    Json(state.router.summaries())
}

pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<Response, ApiError> {
    let body = match (params.path, params.name) {
        (Some(path), None) => match state.router.resolve(&path) {
            Resolution::Matched(route) => {
                let href = state.router.href(route.name);
                ResolveResponse::matched(&route, href)
            }
            Resolution::NoMatch { path } => ResolveResponse::unmatched(path),
        },
        (None, Some(name)) => match state.router.resolve_name(&name) {
            Some(route) => {
                let href = state.router.href(route.name);
                ResolveResponse::matched(&route, href)
            }
            None => ResolveResponse::unmatched(String::new()),
        },
        _ => {
            return Err(ApiError::BadRequest(
                "exactly one of `path` or `name` is required".to_string(),
            ))
        }
    };

    let status = if body.matched {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(body)).into_response())
}

pub async fn system_info(State(state): State<AppState>) -> Result<Json<SystemInfo>, ApiError> {
    let sample = Duration::from_millis(state.config.info.sample_interval_ms);
    Ok(Json(system::collect(sample).await?))
}
