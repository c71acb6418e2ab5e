//! Typed identifier for customers.
//!
//! Identifiers are assigned by the store on insert and are never reused, so
//! unlike a random id there is no constructor that invents one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Customer`](crate::customer::Customer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw store identifier.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(ValidationError::InvalidId)
    }
}
