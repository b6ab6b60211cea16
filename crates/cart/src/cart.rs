use std::collections::BTreeMap;

use shopcart_catalog::{Product, ProductKind};
use shopcart_core::{DomainError, DomainResult, Entity, Money};

use crate::pricing::CartPricing;

/// Shopping cart: products grouped by kind.
///
/// Within a kind, entries keep insertion order. Groups are visited in kind
/// order (unit, weight, electronic). Adding the same product twice stores it
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    groups: BTreeMap<ProductKind, Vec<Product>>,
    pricing: CartPricing,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pricing(pricing: CartPricing) -> Self {
        Self {
            groups: BTreeMap::new(),
            pricing,
        }
    }

    pub fn pricing(&self) -> &CartPricing {
        &self.pricing
    }

    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(id = %product.id(), kind = %product.kind(), "product added to cart");
        self.groups.entry(product.kind()).or_default().push(product);
    }

    /// Entries of one kind, in insertion order.
    pub fn products_of(&self, kind: ProductKind) -> &[Product] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Non-empty groups in kind order.
    pub fn groups(&self) -> impl Iterator<Item = (ProductKind, &[Product])> + '_ {
        self.groups
            .iter()
            .map(|(kind, products)| (*kind, products.as_slice()))
    }

    fn entries(&self) -> impl Iterator<Item = &Product> + '_ {
        self.groups.values().flatten()
    }

    /// Number of entries across every kind.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Contribution of one entry to the cart total.
    pub fn line_price(&self, product: &Product) -> DomainResult<Money> {
        match product.kind() {
            ProductKind::Unit => product.price_for_quantity(self.pricing.unit_quantity),
            ProductKind::Weight => product.price_for_weight(self.pricing.weight_kilos),
            ProductKind::Electronic => Ok(self.pricing.electronic_flat_price),
        }
    }

    pub fn total_price(&self) -> DomainResult<Money> {
        self.entries().try_fold(Money::zero(), |total, product| {
            total
                .checked_add(self.line_price(product)?)
                .ok_or_else(|| DomainError::overflow("cart total"))
        })
    }

    /// Human-readable listing of the cart, grouped by kind.
    pub fn contents(&self) -> CartContents<'_> {
        CartContents(self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CartContents<'a>(&'a Cart);

impl core::fmt::Display for CartContents<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Cart contents:")?;
        for (kind, products) in self.0.groups() {
            writeln!(f, "Kind {kind}:")?;
            for product in products {
                writeln!(f, "- {}", product.name())?;
            }
        }
        Ok(())
    }
}
