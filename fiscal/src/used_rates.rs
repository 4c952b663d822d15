//! Derives which exchange rates a computation relied on.

use crate::config::BASE_CURRENCY;
use crate::currency::Currency;
use crate::exchange_rates::ExchangeRates;
use crate::state::TaxState;
use dioxus_logger::tracing::debug;

/// An exchange rate that took part in converting an amount to the base currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsedRate {
    pub currency: Currency,
    pub value: f64,
}

/// Ordered list of used rates: the income currency first, then the expense
/// currency.
///
/// Never holds the base currency and never holds a currency twice, so it has
/// at most two entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsedRates(Vec<UsedRate>);

impl UsedRates {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when more than one rate was used; selects plural wording.
    pub fn is_plural(&self) -> bool {
        self.0.len() > 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UsedRate> {
        self.0.iter()
    }

    fn push_from(&mut self, rates: &ExchangeRates, currency: Currency) {
        if currency == BASE_CURRENCY {
            return;
        }
        match rates.get(currency) {
            Some(value) => self.0.push(UsedRate { currency, value }),
            None => debug!("no exchange rate available for {}", currency),
        }
    }
}

/// Lists the rates used to convert income and deductible expenses.
///
/// A rate is listed only when the amount is entered, its currency is known and
/// differs from the base currency, and a rate table is supplied. The expense
/// currency is skipped when it equals the income currency, even if no income
/// was entered.
pub fn used_exchange_rates(state: &TaxState, rates: Option<&ExchangeRates>) -> UsedRates {
    let mut used = UsedRates::default();
    let Some(rates) = rates else {
        return used;
    };

    if let (Some(_), Some(currency)) = (state.entered_income(), state.income_currency) {
        used.push_from(rates, currency);
    }

    if let (Some(_), Some(currency)) = (
        state.entered_deductible_expenses(),
        state.deductible_expenses_currency,
    ) {
        // Only the income currency can already be listed.
        if state.income_currency != Some(currency) {
            used.push_from(rates, currency);
        }
    }

    used
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> ExchangeRates {
        [
            (Currency::EUR, 4.9764),
            (Currency::USD, 4.3127),
            (Currency::RON, 1.0),
        ]
        .into_iter()
        .collect()
    }

    fn state(
        income: Option<(f64, Currency)>,
        expenses: Option<(f64, Currency)>,
    ) -> TaxState {
        TaxState {
            income: income.map(|(amount, _)| amount),
            income_currency: income.map(|(_, currency)| currency),
            deductible_expenses: expenses.map(|(amount, _)| amount),
            deductible_expenses_currency: expenses.map(|(_, currency)| currency),
            ..Default::default()
        }
    }

    fn currencies(used: &UsedRates) -> Vec<Currency> {
        used.iter().map(|rate| rate.currency).collect()
    }

    #[test]
    fn nothing_is_used_without_a_rate_table() {
        let state = state(Some((1_000.0, Currency::EUR)), Some((10.0, Currency::USD)));
        assert!(used_exchange_rates(&state, None).is_empty());
    }

    #[test]
    fn missing_income_or_currency_skips_income_rate() {
        let rates = rates();
        let mut state = state(Some((1_000.0, Currency::EUR)), None);
        state.income = None;
        assert!(used_exchange_rates(&state, Some(&rates)).is_empty());

        let mut state = state.clone();
        state.income = Some(1_000.0);
        state.income_currency = None;
        assert!(used_exchange_rates(&state, Some(&rates)).is_empty());
    }

    #[test]
    fn zero_income_counts_as_missing() {
        let rates = rates();
        let state = state(Some((0.0, Currency::EUR)), None);
        assert!(used_exchange_rates(&state, Some(&rates)).is_empty());
    }

    #[test]
    fn base_currency_is_never_listed() {
        let rates = rates();
        let state = state(Some((1_000.0, Currency::RON)), Some((10.0, Currency::RON)));
        assert!(used_exchange_rates(&state, Some(&rates)).is_empty());
    }

    #[test]
    fn single_foreign_income_currency() {
        let rates = rates();
        let state = state(Some((1_000.0, Currency::EUR)), Some((10.0, Currency::RON)));
        let used = used_exchange_rates(&state, Some(&rates));
        assert_eq!(
            used.iter().copied().collect::<Vec<_>>(),
            vec![UsedRate {
                currency: Currency::EUR,
                value: 4.9764
            }]
        );
        assert!(!used.is_plural());
    }

    #[test]
    fn single_foreign_expense_currency() {
        let rates = rates();
        let state = state(Some((1_000.0, Currency::RON)), Some((10.0, Currency::USD)));
        let used = used_exchange_rates(&state, Some(&rates));
        assert_eq!(currencies(&used), vec![Currency::USD]);
    }

    #[test]
    fn two_distinct_foreign_currencies_keep_income_first() {
        let rates = rates();
        let state = state(Some((1_000.0, Currency::EUR)), Some((10.0, Currency::USD)));
        let used = used_exchange_rates(&state, Some(&rates));
        assert_eq!(used.len(), 2);
        assert!(used.is_plural());
        assert_eq!(currencies(&used), vec![Currency::EUR, Currency::USD]);
    }

    #[test]
    fn shared_currency_is_listed_once() {
        let rates = rates();
        let state = state(Some((1_000.0, Currency::EUR)), Some((10.0, Currency::EUR)));
        let used = used_exchange_rates(&state, Some(&rates));
        assert_eq!(currencies(&used), vec![Currency::EUR]);
    }

    #[test]
    fn expense_matching_income_currency_is_skipped_without_income() {
        let rates = rates();
        let mut state = state(Some((1_000.0, Currency::EUR)), Some((10.0, Currency::EUR)));
        state.income = None;
        assert!(used_exchange_rates(&state, Some(&rates)).is_empty());
    }

    #[test]
    fn currency_missing_from_table_is_omitted() {
        let rates = rates();
        let state = state(Some((1_000.0, Currency::GBP)), Some((10.0, Currency::USD)));
        let used = used_exchange_rates(&state, Some(&rates));
        assert_eq!(currencies(&used), vec![Currency::USD]);
    }
}
