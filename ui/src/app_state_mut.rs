//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;
use fiscal::exchange_rates::ExchangeRates;
use fiscal::state::TaxState;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Views read a snapshot of these signals and hand it to components by value;
/// only the screens that edit a value write to its signal.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Income, expenses and thresholds as currently entered.
    pub tax_state: Signal<TaxState>,
    /// The exchange rate table. `None` until rates are available.
    pub exchange_rates: Signal<Option<ExchangeRates>>,
    /// True while the rate table is being loaded.
    pub exchange_rates_loading: Signal<bool>,
}

impl AppStateMut {
    /// Whether gross income is above the VAT threshold, if it can be told.
    pub fn gross_income_over_vat_threshold(&self) -> Option<bool> {
        self.tax_state
            .read()
            .is_over_vat_threshold(self.exchange_rates.read().as_ref())
    }
}
