//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use core::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Monotonic source of numeric identifiers.
///
/// Each call to [`IdSequence::next_raw`] returns a value strictly greater than
/// every value previously returned by the same sequence.
#[derive(Debug)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    pub const fn new(start: u64) -> Self {
        Self(AtomicU64::new(start))
    }

    pub fn next_raw(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

static PRODUCT_IDS: IdSequence = IdSequence::new(0);

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Draw the next identifier from the process-wide product sequence.
    pub fn next() -> Self {
        Self::next_in(&PRODUCT_IDS)
    }

    /// Draw the next identifier from `seq`.
    pub fn next_in(seq: &IdSequence) -> Self {
        Self(seq.next_raw())
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(raw))
    }
}
