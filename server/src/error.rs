//! Error types for the todo service.
//!
//! # Design
//! `RepoError` is what a `TodoRepository` reports; `ApiError` is what a
//! handler returns. `NotFound` survives the conversion unchanged because the
//! controller answers it with 404. Every other repository failure becomes a
//! 500 whose details are logged but not echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::todo::TodoId;

/// Failures reported by a repository implementation.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => ApiError::NotFound(id),
            RepoError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_not_found_maps_to_404() {
        let err = ApiError::from(RepoError::NotFound(3));
        assert!(matches!(err, ApiError::NotFound(3)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "todo 3 not found");
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let err = ApiError::from(RepoError::Storage("disk on fire".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_keeps_message() {
        let err = ApiError::BadRequest("missing field `title`".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("title"));
    }

    #[tokio::test]
    async fn internal_error_response_hides_detail() {
        let resp = ApiError::Internal("secret".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = std::str::from_utf8(&bytes).unwrap();
        assert!(!body.contains("secret"));
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["error"], "internal server error");
    }
}
