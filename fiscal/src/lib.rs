//! This crate contains the shared fiscal model read by the calculator UI:
//! currencies, exchange rates, the tax state snapshot and display formatting.

pub mod config;
pub mod currency;
pub mod exchange_rates;
pub mod format;
pub mod settings;
pub mod state;
pub mod used_rates;
