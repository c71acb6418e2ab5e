//! The `{"data": ...}` wrapper put around every successful JSON payload.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Single-field JSON envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
