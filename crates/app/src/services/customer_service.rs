//! Customer service — use-cases for managing customers.

use clientele_domain::customer::{Customer, CustomerDetails};
use clientele_domain::error::{ClienteleError, NotFoundError};
use clientele_domain::id::CustomerId;
use clientele_domain::page::{Page, PageRequest};

use crate::ports::CustomerRepository;

/// Application service for customer operations.
pub struct CustomerService<R> {
    repo: R,
}

fn not_found(id: CustomerId) -> ClienteleError {
    NotFoundError {
        entity: "Customer",
        id: id.to_string(),
    }
    .into()
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, details))]
    pub async fn create_customer(
        &self,
        details: CustomerDetails,
    ) -> Result<Customer, ClienteleError> {
        self.repo.create(details).await
    }

    /// Replace the writable fields of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when no customer with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, details))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        details: CustomerDetails,
    ) -> Result<Customer, ClienteleError> {
        self.repo
            .update(id, details)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Look up a customer by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when no customer with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, ClienteleError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Fetch one page of customers along with the total customer count.
    ///
    /// The page and the count are two separate reads, so a concurrent insert
    /// may land between them.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(
        &self,
        request: PageRequest,
    ) -> Result<Page<Customer>, ClienteleError> {
        let items = self.repo.list(request.offset(), request.limit()).await?;
        let total_records = self.repo.count().await?;
        Ok(Page {
            items,
            total_records,
            limit: request.limit(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_domain::time;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryCustomerRepo {
        store: Mutex<BTreeMap<CustomerId, Customer>>,
    }

    impl CustomerRepository for InMemoryCustomerRepo {
        fn create(
            &self,
            details: CustomerDetails,
        ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.as_i64() + 1);
            let now = time::now();
            let customer = Customer {
                id: CustomerId::from_raw(next),
                name: details.name,
                date_of_birth: details.date_of_birth,
                email: details.email,
                contact: details.contact,
                created_at: now,
                updated_at: now,
            };
            store.insert(customer.id, customer.clone());
            async { Ok(customer) }
        }

        fn update(
            &self,
            id: CustomerId,
            details: CustomerDetails,
        ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.get_mut(&id).map(|customer| {
                customer.name = details.name;
                customer.date_of_birth = details.date_of_birth;
                customer.email = details.email;
                customer.contact = details.contact;
                customer.updated_at = time::now();
                customer.clone()
            });
            async { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: CustomerId,
        ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn list(
            &self,
            offset: u64,
            limit: u32,
        ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Customer> = store
                .values()
                .skip(usize::try_from(offset).unwrap())
                .take(limit as usize)
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn count(&self) -> impl Future<Output = Result<u64, ClienteleError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.len() as u64;
            async move { Ok(result) }
        }
    }

    fn make_service() -> CustomerService<InMemoryCustomerRepo> {
        CustomerService::new(InMemoryCustomerRepo::default())
    }

    fn details(name: &str) -> CustomerDetails {
        CustomerDetails {
            name: name.to_string(),
            date_of_birth: "1990-04-01".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            contact: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_customer_and_fetch_it_back() {
        let svc = make_service();

        let created = svc.create_customer(details("Grace")).await.unwrap();
        let fetched = svc.get_customer(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.details(), details("Grace"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_customer_missing() {
        let svc = make_service();
        let result = svc.get_customer(CustomerId::from_raw(404)).await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_details_on_update() {
        let svc = make_service();
        let created = svc.create_customer(details("Grace")).await.unwrap();

        let updated = svc
            .update_customer(created.id, details("Hopper"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.details(), details("Hopper"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_customer() {
        let svc = make_service();
        let result = svc
            .update_customer(CustomerId::from_raw(7), details("Nobody"))
            .await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_requested_page_with_total() {
        let svc = make_service();
        for i in 0..25 {
            svc.create_customer(details(&format!("C{i}"))).await.unwrap();
        }

        let page = svc.list_customers(PageRequest::new(3, 10)).await.unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_records, 25);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items[0].name, "C20");
    }

    #[tokio::test]
    async fn should_return_empty_page_past_the_end() {
        let svc = make_service();
        svc.create_customer(details("Only")).await.unwrap();

        let page = svc.list_customers(PageRequest::new(5, 10)).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_records, 1);
    }
}
