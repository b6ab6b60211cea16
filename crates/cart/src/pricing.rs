use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopcart_core::Money;

/// Per-kind pricing rule applied when totalling a cart.
///
/// Carts don't record quantities or weights yet, so every entry is priced with
/// these fixed figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartPricing {
    /// Units charged for each unit-priced entry.
    pub unit_quantity: u32,
    /// Kilos charged for each weight-priced entry.
    pub weight_kilos: Decimal,
    /// Flat price charged for each electronic device.
    pub electronic_flat_price: Money,
}

impl Default for CartPricing {
    fn default() -> Self {
        Self {
            unit_quantity: 1,
            weight_kilos: Decimal::new(25, 1),
            electronic_flat_price: Money::new(Decimal::new(500, 0)),
        }
    }
}
