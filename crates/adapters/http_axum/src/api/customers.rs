//! JSON REST handlers for customers.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use clientele_app::ports::CustomerRepository;
use clientele_domain::customer::{Customer, CustomerDetails};
use clientele_domain::error::ClienteleError;
use clientele_domain::id::CustomerId;
use clientele_domain::page::{Page, PageRequest};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Raw query pairs of the list endpoint.
///
/// Kept as pairs so that a repeated key is not a rejection: the first
/// occurrence wins and anything unusable falls back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ListQuery(pub Vec<(String, String)>);

impl ListQuery {
    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.first("page"), self.first("limit"))
    }
}

/// Payload of the list endpoint, nested inside the envelope.
#[derive(Debug, Serialize)]
pub struct Listing {
    pub data: Vec<Customer>,
    pub total_pages: u64,
}

impl From<Page<Customer>> for Listing {
    fn from(page: Page<Customer>) -> Self {
        let total_pages = page.total_pages();
        Self {
            data: page.items,
            total_pages,
        }
    }
}

/// Possible responses from the create, update and get endpoints.
pub enum CustomerResponse {
    Ok(Envelope<Customer>),
}

impl IntoResponse for CustomerResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(envelope) => envelope.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Envelope<Listing>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(envelope) => envelope.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<CustomerId, ApiError> {
    raw.parse::<CustomerId>()
        .map_err(|err| ApiError::from(ClienteleError::from(err)))
}

/// `GET /customers?page=&limit=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let page = state
        .customer_service
        .list_customers(query.page_request())
        .await?;
    Ok(ListResponse::Ok(Envelope::new(Listing::from(page))))
}

/// `GET /customers/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<CustomerResponse, ApiError>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let customer = state.customer_service.get_customer(id).await?;
    Ok(CustomerResponse::Ok(Envelope::new(customer)))
}

/// `POST /customers`
///
/// Answers `200 OK` rather than `201 Created`; existing clients expect it.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    JsonBody(details): JsonBody<CustomerDetails>,
) -> Result<CustomerResponse, ApiError>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let customer = state.customer_service.create_customer(details).await?;
    Ok(CustomerResponse::Ok(Envelope::new(customer)))
}

/// `PUT /customers/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    JsonBody(details): JsonBody<CustomerDetails>,
) -> Result<CustomerResponse, ApiError>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let customer = state.customer_service.update_customer(id, details).await?;
    Ok(CustomerResponse::Ok(Envelope::new(customer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        ListQuery(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn should_use_first_occurrence_when_key_repeated() {
        let req = query(&[("page", "3"), ("limit", "5"), ("page", "7")]).page_request();
        assert_eq!(req.page(), 3);
        assert_eq!(req.limit(), 5);
    }

    #[test]
    fn should_ignore_unknown_keys() {
        let req = query(&[("sort", "name"), ("limit", "20")]).page_request();
        assert_eq!(req, PageRequest::new(1, 20));
    }
}
