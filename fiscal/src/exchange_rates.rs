//! Provides a specialized map of exchange rates against the base currency.

use crate::config::BASE_CURRENCY;
use crate::currency::Currency;
use serde::Deserialize;
use std::collections::HashMap;

/// A table holding, for each currency, the amount of base currency one unit buys.
///
/// Deserializes from a plain JSON object keyed by currency code, e.g.
/// `{"EUR": 4.9764, "usd": 4.3127}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRates(HashMap<Currency, f64>);

impl ExchangeRates {
    /// Inserts or updates the rate for a currency, returning the previous rate.
    pub fn insert(&mut self, currency: Currency, rate: f64) -> Option<f64> {
        self.0.insert(currency, rate)
    }

    /// Removes the rate for a currency, returning it if it existed.
    pub fn remove(&mut self, currency: Currency) -> Option<f64> {
        self.0.remove(&currency)
    }

    /// Retrieves the rate for a currency.
    ///
    /// Returns `None` if the table has no entry for it.
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.0.get(&currency).copied()
    }

    /// Converts an amount to the base currency.
    ///
    /// Amounts already in the base currency are returned unchanged, whether or
    /// not the table lists it.
    pub fn to_base(&self, amount: f64, currency: Currency) -> Option<f64> {
        if currency == BASE_CURRENCY {
            return Some(amount);
        }
        self.get(currency).map(|rate| amount * rate)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over `(currency, rate)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.0.iter().map(|(currency, rate)| (*currency, *rate))
    }
}

impl FromIterator<(Currency, f64)> for ExchangeRates {
    fn from_iter<I: IntoIterator<Item = (Currency, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
