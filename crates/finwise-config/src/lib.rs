//! finwise-config
//!
//! Persistent user preferences: locale, currency, calculator defaults.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{CalculatorDefaults, Config, Theme};
