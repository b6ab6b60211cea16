//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here. Console and configuration
/// problems are the binary's concern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (e.g. empty product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A pricing rule was applied to a product of another kind.
    #[error("kind mismatch: expected a {expected} product, got a {actual} product")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A price computation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested product was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::KindMismatch { expected, actual }
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mismatch_message_names_both_kinds() {
        let err = DomainError::kind_mismatch("unit", "weight");
        assert_eq!(
            err.to_string(),
            "kind mismatch: expected a unit product, got a weight product"
        );
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("name cannot be empty");
        assert_eq!(err.to_string(), "validation failed: name cannot be empty");
    }
}
