//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that ignores the `Content-Type` header and reports
/// every decoding failure as `400 Bad Request`.
///
/// A literal `null` body yields `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value: Option<T> = serde_json::from_slice(&bytes)?;
        Ok(Self(value.unwrap_or_default()))
    }
}
