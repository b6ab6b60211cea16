//! `shopcart` binary support: configuration and the demo scenario.

pub mod config;
pub mod demo;

pub use config::{CliConfig, ConfigError};
pub use demo::run;
