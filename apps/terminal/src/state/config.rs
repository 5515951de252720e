//! # Configuration State
//!
//! Display settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SPLITTRIP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use splittrip_core::money::MIN_DECIMALS;
use splittrip_core::Money;
use thiserror::Error;

/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "SPLITTRIP_CURRENCY_SYMBOL";

/// Environment variable overriding the number of decimals shown.
pub const ENV_CURRENCY_DECIMALS: &str = "SPLITTRIP_CURRENCY_DECIMALS";

/// Shown in place of an amount too large to display.
pub const UNDISPLAYABLE_AMOUNT: &str = "--";

/// Most fraction digits a display amount may carry.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Configuration loading errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display only; amounts are never converted)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// `$` with two decimals, e.g. `$ 75.00`.
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SPLITTRIP_CURRENCY_SYMBOL`: Override the symbol (e.g. "€")
    /// - `SPLITTRIP_CURRENCY_DECIMALS`: Override decimals, `2..=4`. Amounts
    ///   are already rounded to cents, so fewer digits are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a closure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: ENV_CURRENCY_SYMBOL.to_string(),
                    value: symbol.to_string(),
                });
            }
            config.currency_symbol = symbol.to_string();
        }

        if let Some(decimals) = lookup(ENV_CURRENCY_DECIMALS) {
            config.currency_decimals = decimals
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| (MIN_DECIMALS..=MAX_CURRENCY_DECIMALS).contains(d))
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: ENV_CURRENCY_DECIMALS.to_string(),
                    value: decimals.clone(),
                })?;
        }

        Ok(config)
    }

    /// Formats an amount as a currency string, symbol first.
    ///
    /// ## Example
    /// ```rust
    /// use splittrip_core::Money;
    /// use splittrip_terminal_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(7500)), "$ 75.00");
    /// ```
    pub fn format_currency(&self, money: Money) -> String {
        format!(
            "{} {}",
            self.currency_symbol,
            money.format_amount(self.currency_decimals)
        )
    }

    /// Like [`ConfigState::format_currency`], for a computed amount that may
    /// not fit in [`Money`].
    pub fn format_computed(&self, money: Option<Money>) -> String {
        match money {
            Some(money) => self.format_currency(money),
            None => format!("{} {}", self.currency_symbol, UNDISPLAYABLE_AMOUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_CURRENCY_SYMBOL, "€"),
            (ENV_CURRENCY_DECIMALS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.format_currency(Money::from_cents(7550)), "€ 75.500");
    }

    #[test]
    fn test_decimals_below_cents_rejected() {
        for decimals in ["0", "1"] {
            assert_eq!(
                ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_DECIMALS, decimals)])),
                Err(ConfigError::InvalidValue {
                    var: ENV_CURRENCY_DECIMALS.to_string(),
                    value: decimals.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_invalid_decimals() {
        let err = ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_DECIMALS, "nine")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: ENV_CURRENCY_DECIMALS.to_string(),
                value: "nine".to_string(),
            }
        );
        assert!(ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_DECIMALS, "5")])).is_err());
    }

    #[test]
    fn test_blank_symbol_rejected() {
        assert!(ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_SYMBOL, "  ")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(10000)), "$ 100.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$ 0.01");
        assert_eq!(config.format_currency(Money::zero()), "$ 0.00");
    }

    #[test]
    fn test_format_computed() {
        let config = ConfigState::default();
        assert_eq!(config.format_computed(Money::from_amount(75.0)), "$ 75.00");
        assert_eq!(config.format_computed(Money::from_amount(f64::INFINITY)), "$ --");
    }
}
