//! HTTP error response mapping.
//!
//! Errors are answered with a plain-text body and no envelope.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clientele_domain::error::ClienteleError;

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the application layer.
    Domain(ClienteleError),
    /// The request body is not the JSON document the route expects.
    MalformedBody(serde_json::Error),
    /// The request body could not be read at all.
    UnreadableBody(BytesRejection),
}

impl From<ClienteleError> for ApiError {
    fn from(err: ClienteleError) -> Self {
        Self::Domain(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(err: BytesRejection) -> Self {
        Self::UnreadableBody(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(ClienteleError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(ClienteleError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(err @ ClienteleError::Storage(_)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::MalformedBody(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::UnreadableBody(rejection) => return rejection.into_response(),
        };

        (status, message).into_response()
    }
}
