//! Configuration: optional JSON file plus environment overrides.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use shopcart_cart::CartPricing;
use shopcart_core::Money;

pub const CONFIG_FILE_VAR: &str = "SHOPCART_CONFIG";
pub const UNIT_QUANTITY_VAR: &str = "SHOPCART_UNIT_QUANTITY";
pub const WEIGHT_KILOS_VAR: &str = "SHOPCART_WEIGHT_KILOS";
pub const ELECTRONIC_PRICE_VAR: &str = "SHOPCART_ELECTRONIC_PRICE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub pricing: CartPricing,
}

impl CliConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables.
    ///
    /// The file named by `SHOPCART_CONFIG` is read first; individual
    /// variables then override its values. Unparseable or negative overrides
    /// are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_FILE_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(quantity) = parse_var::<u32>(&lookup, UNIT_QUANTITY_VAR) {
            config.pricing.unit_quantity = quantity;
        }
        if let Some(kilos) = parse_non_negative(&lookup, WEIGHT_KILOS_VAR) {
            config.pricing.weight_kilos = kilos;
        }
        if let Some(price) = parse_non_negative(&lookup, ELECTRONIC_PRICE_VAR) {
            config.pricing.electronic_flat_price = Money::new(price);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(%key, value = %raw, error = %e, "ignoring invalid config override");
            None
        }
    }
}

fn parse_non_negative(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Decimal> {
    let value = parse_var::<Decimal>(lookup, key)?;
    if value < Decimal::ZERO {
        tracing::warn!(%key, %value, "ignoring negative config override");
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shopcart-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn no_variables_gives_default_pricing() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn variables_override_pricing() {
        let config = CliConfig::from_lookup(lookup(&[
            (UNIT_QUANTITY_VAR, "3"),
            (WEIGHT_KILOS_VAR, "0.75"),
            (ELECTRONIC_PRICE_VAR, "199.99"),
        ]))
        .unwrap();

        assert_eq!(config.pricing.unit_quantity, 3);
        assert_eq!(config.pricing.weight_kilos, Decimal::new(75, 2));
        assert_eq!(
            config.pricing.electronic_flat_price,
            Money::new(Decimal::new(19999, 2))
        );
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let config =
            CliConfig::from_lookup(lookup(&[(UNIT_QUANTITY_VAR, "lots"), (WEIGHT_KILOS_VAR, "")]))
                .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn negative_overrides_are_ignored() {
        let config = CliConfig::from_lookup(lookup(&[
            (WEIGHT_KILOS_VAR, "-2"),
            (ELECTRONIC_PRICE_VAR, "-0.01"),
        ]))
        .unwrap();
        assert_eq!(config, CliConfig::default());

        let config = CliConfig::from_lookup(lookup(&[(WEIGHT_KILOS_VAR, "0")])).unwrap();
        assert_eq!(config.pricing.weight_kilos, Decimal::ZERO);
    }

    #[test]
    fn file_values_are_loaded_then_overridden() {
        let path = temp_file(
            "override.json",
            r#"{ "pricing": { "unit_quantity": 4, "weight_kilos": "1.5" } }"#,
        );
        let path_str = path.to_string_lossy().into_owned();
        let config = CliConfig::from_lookup(lookup(&[
            (CONFIG_FILE_VAR, path_str.as_str()),
            (WEIGHT_KILOS_VAR, "2"),
        ]))
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.pricing.unit_quantity, 4);
        assert_eq!(config.pricing.weight_kilos, Decimal::new(2, 0));
        assert_eq!(
            config.pricing.electronic_flat_price,
            CartPricing::default().electronic_flat_price
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CliConfig::from_lookup(lookup(&[(
            CONFIG_FILE_VAR,
            "/nonexistent/shopcart/config.json",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_file("malformed.json", "{ not json");
        let err = CliConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
