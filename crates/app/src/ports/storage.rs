//! Storage port — repository trait for customer persistence.

use std::future::Future;

use clientele_domain::customer::{Customer, CustomerDetails};
use clientele_domain::error::ClienteleError;
use clientele_domain::id::CustomerId;

/// Repository for persisting and querying [`Customer`]s.
///
/// Implementations own the identifier and both timestamps: every method that
/// writes returns the record as read back from the store.
pub trait CustomerRepository {
    /// Insert a new customer and return the stored record.
    fn create(
        &self,
        details: CustomerDetails,
    ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send;

    /// Replace all writable fields of `id` and refresh `updated_at`.
    ///
    /// Returns `None` when no customer has that id.
    fn update(
        &self,
        id: CustomerId,
        details: CustomerDetails,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send;

    /// Get a customer by its identifier.
    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send;

    /// Get at most `limit` customers after skipping `offset`, in store order.
    fn list(
        &self,
        offset: u64,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send;

    /// Count every stored customer.
    fn count(&self) -> impl Future<Output = Result<u64, ClienteleError>> + Send;
}
