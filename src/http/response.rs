//! Error responses for the JSON endpoints.
//!
//! # Design Decisions
//! - Every API error is a JSON object `{"error": "..."}`
//! - Bad input maps to 400, host read failures to 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::system::SystemInfoError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("system report unavailable: {0}")]
    SystemInfo(#[from] SystemInfoError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SystemInfo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "API request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        let unavailable = SystemInfoError::Unavailable("memory");
        assert_eq!(ApiError::from(unavailable).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response() {
        let response = ApiError::BadRequest("pick one".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
