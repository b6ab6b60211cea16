//! The demo scenario: stock three products, fill a cart, print the report.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopcart_cart::Cart;
use shopcart_catalog::{Product, Store};
use shopcart_core::Money;

use crate::config::CliConfig;

/// Build the sample store and cart as of `today`, writing the report to `out`.
///
/// The report holds the store listing, the cart contents and a
/// `Cart total: ...` line.
pub fn run(config: &CliConfig, today: NaiveDate, out: &mut impl Write) -> anyhow::Result<()> {
    let products = [
        Product::unit(
            "T-shirt",
            "100% cotton, all sizes",
            Money::new(Decimal::new(15, 0)),
        )?,
        Product::by_weight(
            "Tomatoes",
            "Organic, grown in France",
            Money::new(Decimal::new(35, 1)),
            today,
        )?,
        Product::electronic("Smartphone", "Apple iPhone 13, 128 GB, blue", today)?,
    ];

    let mut store = Store::new();
    let mut cart = Cart::with_pricing(config.pricing.clone());
    for product in products {
        cart.add_product(product.clone());
        store.add_product(product);
    }

    write!(out, "{}", store.listing(today))?;
    write!(out, "{}", cart.contents())?;

    let total = cart.total_price()?;
    writeln!(out, "Cart total: {total}")?;

    tracing::info!(products = store.len(), cart_entries = cart.len(), %total, "demo complete");
    Ok(())
}
