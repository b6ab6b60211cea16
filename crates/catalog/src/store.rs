use chrono::NaiveDate;

use shopcart_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// The store's catalog: an append-only, ordered list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(id = %product.id(), name = product.name(), "product added to store");
        self.products.push(product);
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Every product, one line each.
    pub fn listing(&self, today: NaiveDate) -> StoreListing<'_> {
        StoreListing {
            products: &self.products,
            today,
        }
    }

    /// Same as [`Store::listing`], under a "Products for sale:" header.
    pub fn for_sale(&self, today: NaiveDate) -> ForSaleListing<'_> {
        ForSaleListing(self.listing(today))
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StoreListing<'a> {
    products: &'a [Product],
    today: NaiveDate,
}

impl core::fmt::Display for StoreListing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for product in self.products {
            writeln!(f, "{}", product.listing(self.today))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ForSaleListing<'a>(StoreListing<'a>);

impl core::fmt::Display for ForSaleListing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Products for sale:")?;
        core::fmt::Display::fmt(&self.0, f)
    }
}
