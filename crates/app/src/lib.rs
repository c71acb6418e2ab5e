//! # clientele-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CustomerRepository` — insert, replace, look up, page through and count customers
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CustomerService` — create, update, get, list
//! - Turn "no such row" answers from the store into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `clientele-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
