//! # clientele-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for customers (`/customers`, `/customers/{id}`)
//!   and a plain-text liveness probe at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Wrap every successful payload in the `{"data": ...}` envelope
//! - Map application errors into status codes with plain-text bodies
//!
//! ## Dependency rule
//! Depends on `clientele-app` (for port traits and services) and `clientele-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
