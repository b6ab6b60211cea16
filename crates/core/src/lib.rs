//! `shopcart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console output).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdSequence, ProductId};
pub use money::Money;
pub use value_object::ValueObject;
