use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopcart_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Length of the manufacturer warranty on electronic devices.
pub const WARRANTY_MONTHS: u32 = 12;

/// Kind tag: selects which pricing rule and fields apply to a product.
///
/// Ordering follows the numeric codes (unit, weight, electronic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Unit,
    Weight,
    Electronic,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [ProductKind::Unit, ProductKind::Weight, ProductKind::Electronic];

    /// Numeric code of the kind (1, 2, 3).
    pub fn code(self) -> u8 {
        match self {
            ProductKind::Unit => 1,
            ProductKind::Weight => 2,
            ProductKind::Electronic => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Unit => "unit",
            ProductKind::Weight => "weight",
            ProductKind::Electronic => "electronic",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific pricing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pricing {
    /// Sold by the unit.
    Unit { unit_price: Money },
    /// Sold by the kilo.
    Weight {
        price_per_kilo: Money,
        purchased_on: NaiveDate,
    },
    /// Electronic device, optionally covered by a warranty from the purchase date.
    Electronic {
        purchased_on: NaiveDate,
        warranty: bool,
    },
}

impl Pricing {
    pub fn kind(&self) -> ProductKind {
        match self {
            Pricing::Unit { .. } => ProductKind::Unit,
            Pricing::Weight { .. } => ProductKind::Weight,
            Pricing::Electronic { .. } => ProductKind::Electronic,
        }
    }
}

/// A catalog product. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    pricing: Pricing,
}

impl Product {
    /// Product sold by the unit.
    pub fn unit(
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
    ) -> DomainResult<Self> {
        Self::build(name.into(), description.into(), Pricing::Unit { unit_price })
    }

    /// Product sold by weight.
    pub fn by_weight(
        name: impl Into<String>,
        description: impl Into<String>,
        price_per_kilo: Money,
        purchased_on: NaiveDate,
    ) -> DomainResult<Self> {
        Self::build(
            name.into(),
            description.into(),
            Pricing::Weight {
                price_per_kilo,
                purchased_on,
            },
        )
    }

    /// Electronic device covered by the standard warranty.
    pub fn electronic(
        name: impl Into<String>,
        description: impl Into<String>,
        purchased_on: NaiveDate,
    ) -> DomainResult<Self> {
        Self::electronic_with_warranty(name, description, purchased_on, true)
    }

    pub fn electronic_with_warranty(
        name: impl Into<String>,
        description: impl Into<String>,
        purchased_on: NaiveDate,
        warranty: bool,
    ) -> DomainResult<Self> {
        Self::build(
            name.into(),
            description.into(),
            Pricing::Electronic {
                purchased_on,
                warranty,
            },
        )
    }

    fn build(name: String, description: String, pricing: Pricing) -> DomainResult<Self> {
        Self::build_with(name, description, pricing, ProductId::next)
    }

    /// Validate, then draw an id from `next_id`. Rejected products never draw one.
    fn build_with(
        name: String,
        description: String,
        pricing: Pricing,
        next_id: impl FnOnce() -> ProductId,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            tracing::warn!(kind = %pricing.kind(), "rejected product with empty name");
            return Err(DomainError::validation("name cannot be empty"));
        }

        if description.trim().is_empty() {
            tracing::warn!(kind = %pricing.kind(), %name, "rejected product with empty description");
            return Err(DomainError::validation("description cannot be empty"));
        }

        let id = next_id();
        tracing::debug!(%id, %name, kind = %pricing.kind(), "product created");

        Ok(Self {
            id,
            name,
            description,
            pricing,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn kind(&self) -> ProductKind {
        self.pricing.kind()
    }

    /// Price of `quantity` units. Only defined for unit products.
    pub fn price_for_quantity(&self, quantity: u32) -> DomainResult<Money> {
        match &self.pricing {
            Pricing::Unit { unit_price } => unit_price
                .checked_times(Decimal::from(quantity))
                .ok_or_else(|| DomainError::overflow("unit price times quantity")),
            other => Err(DomainError::kind_mismatch(
                ProductKind::Unit.as_str(),
                other.kind().as_str(),
            )),
        }
    }

    /// Price of `kilos` of the product. Only defined for weight products.
    pub fn price_for_weight(&self, kilos: Decimal) -> DomainResult<Money> {
        match &self.pricing {
            Pricing::Weight { price_per_kilo, .. } => price_per_kilo
                .checked_times(kilos)
                .ok_or_else(|| DomainError::overflow("price per kilo times weight")),
            other => Err(DomainError::kind_mismatch(
                ProductKind::Weight.as_str(),
                other.kind().as_str(),
            )),
        }
    }

    /// Last day (exclusive) of warranty coverage.
    ///
    /// `None` for products without a warranty, or if the date would overflow
    /// the calendar.
    pub fn warranty_expires_on(&self) -> Option<NaiveDate> {
        match self.pricing {
            Pricing::Electronic {
                purchased_on,
                warranty: true,
            } => purchased_on.checked_add_months(Months::new(WARRANTY_MONTHS)),
            _ => None,
        }
    }

    /// Whether the product is still covered on `today`.
    pub fn is_under_warranty(&self, today: NaiveDate) -> bool {
        self.warranty_expires_on()
            .is_some_and(|expires_on| today < expires_on)
    }

    /// One-line human-readable description as of `today`.
    pub fn listing(&self, today: NaiveDate) -> ProductListing<'_> {
        ProductListing {
            product: self,
            today,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Display adaptor returned by [`Product::listing`].
#[derive(Debug, Clone, Copy)]
pub struct ProductListing<'a> {
    product: &'a Product,
    today: NaiveDate,
}

impl core::fmt::Display for ProductListing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let p = self.product;
        write!(f, "{} {} - {} : ", p.id, p.name, p.description)?;
        match &p.pricing {
            Pricing::Unit { unit_price } => write!(f, "{unit_price} per unit"),
            Pricing::Weight { price_per_kilo, .. } => write!(f, "{price_per_kilo} per kilo"),
            Pricing::Electronic { .. } => {
                if p.is_under_warranty(self.today) {
                    f.write_str("electronic device, under warranty")
                } else {
                    f.write_str("electronic device, out of warranty")
                }
            }
        }
    }
}
