//! Customer — the single record kept by the registry.

use serde::{Deserialize, Serialize};

use crate::id::CustomerId;
use crate::time::Timestamp;

/// A registered customer as persisted by the store.
///
/// `id`, `created_at` and `updated_at` are owned by the store: they are read
/// back after every write and never taken from client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    pub email: String,
    pub contact: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Customer {
    /// The client-writable part of this record.
    #[must_use]
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            name: self.name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            email: self.email.clone(),
            contact: self.contact.clone(),
        }
    }
}

/// The four free-text fields a client supplies on create and update.
///
/// Updates replace all four fields; a field missing from the JSON body is
/// stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerDetails {
    pub name: String,
    #[serde(rename = "dob", alias = "date_of_birth")]
    pub date_of_birth: String,
    pub email: String,
    pub contact: String,
}
