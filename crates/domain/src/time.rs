//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for a customer's `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
///
/// Persisted timestamps come from the store itself; this is for code that
/// has no store to ask, such as in-memory test doubles.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
