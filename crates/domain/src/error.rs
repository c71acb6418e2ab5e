//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClienteleError`] via `From`, so callers can match on the kind of failure
//! instead of inspecting messages.

use std::num::ParseIntError;

/// Top-level error for every customer operation.
#[derive(Debug, thiserror::Error)]
pub enum ClienteleError {
    /// The caller supplied input that cannot be interpreted.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that could not be converted into a domain value.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A customer identifier was not a 64-bit integer.
    #[error("Invalid id")]
    InvalidId(#[source] ParseIntError),
}

/// A lookup matched no record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that matched nothing.
    pub id: String,
}
