//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one. [`crate::Money`] is the canonical example in
/// this workspace; [`crate::Entity`] is the identity-carrying counterpart.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
