//! Error types for the people API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolodex_store::StoreError;
use tracing::{debug, error};

/// Errors that can occur in the people API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded as the expected JSON shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The `{id}` path segment is not an unsigned integer.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// `GET /people?query=` was sent with an empty query.
    #[error("query parameter is required")]
    MissingQuery,

    /// The path exists but does not accept this HTTP method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// No route matches the request path.
    #[error("not found: {0}")]
    RouteNotFound(String),

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::InvalidId(_) | Self::MissingQuery => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::RouteNotFound(_) | Self::Store(StoreError::PersonNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Store(StoreError::IdSpaceExhausted) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %message, "request rejected");
        }

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
