//! Shopping cart domain module.
//!
//! Groups products by kind and prices them with [`CartPricing`]. Pure domain
//! logic (no IO, no console output).

pub mod cart;
pub mod pricing;

pub use cart::{Cart, CartContents};
pub use pricing::CartPricing;
