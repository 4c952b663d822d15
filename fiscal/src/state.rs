//! The tax state snapshot read by the calculator views.

use crate::config::BASE_CURRENCY;
use crate::config::DEFAULT_MINIMUM_WAGE;
use crate::config::DEFAULT_VAT_THRESHOLD;
use crate::currency::Currency;
use crate::exchange_rates::ExchangeRates;

/// Inputs of a tax computation, as entered by the user.
///
/// Views receive this by value and never mutate it; edits go through the
/// owning signal in the app shell.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxState {
    pub vat_threshold: f64,
    pub income: Option<f64>,
    pub income_currency: Option<Currency>,
    pub minimum_wage: f64,
    pub deductible_expenses: Option<f64>,
    pub deductible_expenses_currency: Option<Currency>,
}

impl Default for TaxState {
    fn default() -> Self {
        Self {
            vat_threshold: DEFAULT_VAT_THRESHOLD,
            income: None,
            income_currency: None,
            minimum_wage: DEFAULT_MINIMUM_WAGE,
            deductible_expenses: None,
            deductible_expenses_currency: None,
        }
    }
}

impl TaxState {
    /// The income amount, if one was entered. Zero counts as not entered.
    pub fn entered_income(&self) -> Option<f64> {
        entered(self.income)
    }

    /// The deductible expenses, if entered. Zero counts as not entered.
    pub fn entered_deductible_expenses(&self) -> Option<f64> {
        entered(self.deductible_expenses)
    }

    /// Gross income converted to the base currency.
    ///
    /// Returns `None` when income or its currency is missing, or when a
    /// foreign currency has no rate available.
    pub fn gross_income_in_base(&self, rates: Option<&ExchangeRates>) -> Option<f64> {
        let income = self.entered_income()?;
        let currency = self.income_currency?;
        match rates {
            Some(rates) => rates.to_base(income, currency),
            None if currency == BASE_CURRENCY => Some(income),
            None => None,
        }
    }

    /// Whether gross income exceeds the VAT registration threshold.
    pub fn is_over_vat_threshold(&self, rates: Option<&ExchangeRates>) -> Option<bool> {
        self.gross_income_in_base(rates)
            .map(|gross| gross > self.vat_threshold)
    }
}

fn entered(amount: Option<f64>) -> Option<f64> {
    amount.filter(|value| *value != 0.0 && !value.is_nan())
}
