//! # clientele-domain
//!
//! Pure domain model for the clientele customer registry.
//!
//! ## Responsibilities
//! - Foundational types: the store-assigned [`CustomerId`](id::CustomerId),
//!   error conventions, timestamps
//! - Define the **Customer** record and the **details** a client may write
//! - Own the pagination arithmetic (page/limit defaults, offsets, page count)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod customer;
pub mod page;
