use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopcart_cli::{CliConfig, run};
use shopcart_core::Money;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn report(config: &CliConfig) -> Vec<String> {
    let mut out = Vec::new();
    run(config, today(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Strip the leading product id from a listing line.
fn without_id(line: &str) -> &str {
    let (id, rest) = line.split_once(' ').unwrap();
    assert!(id.parse::<u64>().is_ok(), "line should start with an id: {line}");
    rest
}

#[test]
fn report_lists_store_then_cart_then_total() {
    let lines = report(&CliConfig::default());

    assert_eq!(lines.len(), 11);
    assert_eq!(
        without_id(&lines[0]),
        "T-shirt - 100% cotton, all sizes : 15 euros per unit"
    );
    assert_eq!(
        without_id(&lines[1]),
        "Tomatoes - Organic, grown in France : 3.5 euros per kilo"
    );
    assert_eq!(
        without_id(&lines[2]),
        "Smartphone - Apple iPhone 13, 128 GB, blue : electronic device, under warranty"
    );
    assert_eq!(
        &lines[3..],
        [
            "Cart contents:",
            "Kind unit:",
            "- T-shirt",
            "Kind weight:",
            "- Tomatoes",
            "Kind electronic:",
            "- Smartphone",
            "Cart total: 523.75 euros",
        ]
    );
}

#[test]
fn product_ids_increase_down_the_listing() {
    let lines = report(&CliConfig::default());
    let ids: Vec<u64> = lines[..3]
        .iter()
        .map(|l| l.split_once(' ').unwrap().0.parse().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn configured_pricing_changes_the_total() {
    let mut config = CliConfig::default();
    config.pricing.unit_quantity = 2;
    config.pricing.weight_kilos = Decimal::ONE;
    config.pricing.electronic_flat_price = Money::new(Decimal::new(100, 0));

    let lines = report(&config);
    // 15 * 2 + 3.5 * 1 + 100
    assert_eq!(lines.last().unwrap(), "Cart total: 133.5 euros");
}

#[test]
fn overflowing_pricing_is_reported_as_an_error() {
    let mut config = CliConfig::default();
    config.pricing.weight_kilos = Decimal::MAX;

    let mut out = Vec::new();
    let err = run(&config, today(), &mut out).unwrap_err();
    assert!(err.to_string().contains("overflow"), "unexpected error: {err}");

    let printed = String::from_utf8(out).unwrap();
    assert!(!printed.contains("Cart total"));
}
