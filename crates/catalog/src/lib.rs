//! Catalog domain module.
//!
//! This crate contains the product model and the store's product list,
//! implemented purely as deterministic domain logic (no IO, no console output).
//! Anything date-dependent takes "today" as an argument.

pub mod product;
pub mod store;

pub use product::{Pricing, Product, ProductKind, ProductListing, WARRANTY_MONTHS};
pub use store::{ForSaleListing, Store, StoreListing};
