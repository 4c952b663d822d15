//! Start-up settings, read from environment variables with in-code defaults.

use crate::config::DEFAULT_MINIMUM_WAGE;
use crate::config::DEFAULT_VAT_THRESHOLD;
use crate::currency::Currency;
use crate::exchange_rates::ExchangeRates;
use crate::state::TaxState;
use dioxus_logger::tracing::warn;
use std::env;
use thiserror::Error;

/// An error raised while reading a setting.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{name} is not a valid amount: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("invalid exchange rates: {0}")]
    InvalidRatesJson(#[from] serde_json::Error),
    #[error("exchange rate for {currency} must be positive, got {rate}")]
    NonPositiveRate { currency: Currency, rate: f64 },
}

/// Values the application starts with.
#[derive(Clone, PartialEq, Debug)]
pub struct Settings {
    pub vat_threshold: f64,
    pub minimum_wage: f64,
    /// Rates known at start-up. `None` until a table is provided.
    pub exchange_rates: Option<ExchangeRates>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vat_threshold: DEFAULT_VAT_THRESHOLD,
            minimum_wage: DEFAULT_MINIMUM_WAGE,
            exchange_rates: None,
        }
    }
}

impl Settings {
    /// Creates settings from environment variables.
    ///
    /// # Environment Variables
    /// - `VAT_THRESHOLD`: annual VAT threshold, in RON.
    /// - `MINIMUM_WAGE`: gross monthly minimum wage, in RON.
    /// - `EXCHANGE_RATES`: JSON object of RON per unit, e.g. `{"EUR": 4.97}`.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Settings::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let amount_or = |name: &'static str, default: f64| match lookup(name) {
            None => default,
            Some(value) => parse_amount(name, &value).unwrap_or_else(|e| {
                warn!("{}; using default {}", e, default);
                default
            }),
        };

        let exchange_rates = lookup("EXCHANGE_RATES").and_then(|json| {
            parse_exchange_rates(&json)
                .map_err(|e| warn!("ignoring EXCHANGE_RATES: {}", e))
                .ok()
        });

        Self {
            vat_threshold: amount_or("VAT_THRESHOLD", defaults.vat_threshold),
            minimum_wage: amount_or("MINIMUM_WAGE", defaults.minimum_wage),
            exchange_rates,
        }
    }

    /// The initial tax state: configured thresholds, nothing entered yet.
    pub fn tax_state(&self) -> TaxState {
        TaxState {
            vat_threshold: self.vat_threshold,
            minimum_wage: self.minimum_wage,
            ..Default::default()
        }
    }
}

/// Parses a non-negative, finite amount.
pub fn parse_amount(name: &'static str, value: &str) -> Result<f64, SettingsError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| SettingsError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

/// Parses a JSON object of currency codes to positive rates.
///
/// Codes are matched ignoring case; an unknown code fails the whole table.
pub fn parse_exchange_rates(json: &str) -> Result<ExchangeRates, SettingsError> {
    let rates: ExchangeRates = serde_json::from_str(json)?;
    let invalid = rates.iter().find(|(_, rate)| !(rate.is_finite() && *rate > 0.0));
    match invalid {
        Some((currency, rate)) => Err(SettingsError::NonPositiveRate { currency, rate }),
        None => Ok(rates),
    }
}
