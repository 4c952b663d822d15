//! Read-only summary of the fiscal settings behind a computation.

use crate::components::action_link::ActionLink;
use crate::components::loading_overlay::ExchangeRatesLoadingOverlay;
use crate::components::pico::Card;
use dioxus::prelude::*;
use fiscal::config::HEALTH_CAP_CHANGE_YEAR;
use fiscal::config::HEALTH_CAP_MAX_WAGES_AFTER_CHANGE;
use fiscal::config::HEALTH_CAP_MAX_WAGES_BEFORE_CHANGE;
use fiscal::config::SETTINGS_PATH;
use fiscal::config::UPCOMING_VAT_THRESHOLD;
use fiscal::config::VAT_RATE;
use fiscal::exchange_rates::ExchangeRates;
use fiscal::format::format_as_base_currency;
use fiscal::format::format_exchange_rate;
use fiscal::state::TaxState;
use fiscal::used_rates::used_exchange_rates;

/// VAT rate as a whole percentage.
pub fn vat_rate_percent() -> i64 {
    (VAT_RATE * 100.0).round() as i64
}

/// Shows the VAT threshold, minimum wage, VAT rate, upcoming regulatory
/// changes and the exchange rates a computation used.
///
/// Renders purely from its props. Blocks whose inputs are missing are left
/// out rather than reported.
#[component]
pub fn SettingsInfoCard(
    state: TaxState,
    #[props(!optional)] gross_income_over_vat_threshold: Option<bool>,
    #[props(!optional)] exchange_rates: Option<ExchangeRates>,
    #[props(!optional)] exchange_rates_loading: Option<bool>,
    on_open_settings: Option<EventHandler<MouseEvent>>,
) -> Element {
    let over_threshold = gross_income_over_vat_threshold == Some(true);
    let used_rates = used_exchange_rates(&state, exchange_rates.as_ref());

    let vat_threshold = format_as_base_currency(state.vat_threshold);
    let minimum_wage = format_as_base_currency(state.minimum_wage);
    let upcoming_vat_threshold = format_as_base_currency(UPCOMING_VAT_THRESHOLD);
    let cap_before = format_as_base_currency(
        state.minimum_wage * f64::from(HEALTH_CAP_MAX_WAGES_BEFORE_CHANGE),
    );
    let cap_after = format_as_base_currency(
        state.minimum_wage * f64::from(HEALTH_CAP_MAX_WAGES_AFTER_CHANGE),
    );
    let vat_percent = vat_rate_percent();

    let rates_heading = if used_rates.is_plural() {
        "Cursurile de schimb folosite: "
    } else {
        "Cursul de schimb folosit: "
    };

    rsx! {
        Card {
            class: "settings-info-card",
            style: "position: relative; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; padding: 1rem; font-size: 0.875rem; text-align: center;",

            ExchangeRatesLoadingOverlay { exchange_rates_loading }

            InfoIcon { warning: over_threshold }

            div {
                if over_threshold {
                    p {
                        class: "info-line warning",
                        style: "color: var(--pico-del-color);",
                        "Plafonul de TVA este de "
                        span { class: "nowrap", "{vat_threshold}" }
                        " pe an."
                    }
                }
                p {
                    class: "info-line",
                    "Salariul minim pe economie "
                    span { class: "nowrap", "este de {minimum_wage}" }
                    "."
                }
                p {
                    class: "info-line",
                    "Cota standard de TVA este {vat_percent}%."
                }
                p {
                    class: "info-line",
                    "Plafonul de TVA crește la "
                    span { class: "nowrap", "{upcoming_vat_threshold}" }
                    " începând cu 1 septembrie 2025. PFA-urile care facturează peste acest prag devin plătitoare de TVA."
                }
                p {
                    class: "info-line",
                    "Plafonul maxim anual pentru CASS crește de la {HEALTH_CAP_MAX_WAGES_BEFORE_CHANGE} la {HEALTH_CAP_MAX_WAGES_AFTER_CHANGE} salarii minime (aplicabil veniturilor din {HEALTH_CAP_CHANGE_YEAR}). Valoarea curentă: "
                    span { class: "nowrap", "{cap_before}" }
                    "; după modificare: "
                    span { class: "nowrap", "{cap_after}" }
                    "."
                }
                if !used_rates.is_empty() {
                    p {
                        class: "info-line used-rates",
                        "{rates_heading}"
                        for (index, rate) in used_rates.iter().enumerate() {
                            span {
                                key: "{rate.currency}",
                                class: "nowrap",
                                if index == 1 { " și " }
                                "{format_exchange_rate(rate)}"
                            }
                        }
                        "."
                    }
                }
            }

            p {
                class: "info-line",
                "Vezi aici "
                if let Some(handler) = on_open_settings {
                    ActionLink {
                        href: SETTINGS_PATH,
                        onclick: move |evt| handler.call(evt),
                        "setările"
                    }
                } else {
                    ActionLink { href: SETTINGS_PATH, "setările" }
                }
                "."
            }
        }
    }
}

/// Circled "i" glyph, tinted when `warning` is set.
#[component]
fn InfoIcon(warning: bool) -> Element {
    rsx! {
        svg {
            class: if warning { "info-icon warning" } else { "info-icon" },
            xmlns: "http://www.w3.org/2000/svg",
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: if warning { "var(--pico-del-color)" } else { "currentColor" },
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "9" }
            line { x1: "12", y1: "8", x2: "12.01", y2: "8" }
            polyline { points: "11 12 12 12 12 16 13 16" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiscal::currency::Currency;

    fn rates() -> ExchangeRates {
        [(Currency::EUR, 4.9764), (Currency::USD, 4.3127)]
            .into_iter()
            .collect()
    }

    fn render(
        state: TaxState,
        over: Option<bool>,
        rates: Option<ExchangeRates>,
        loading: Option<bool>,
    ) -> String {
        dioxus_ssr::render_element(rsx! {
            SettingsInfoCard {
                state,
                gross_income_over_vat_threshold: over,
                exchange_rates: rates,
                exchange_rates_loading: loading,
            }
        })
    }

    fn with_amounts(
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

    #[test]
    fn shows_fixed_lines() {
        let html = render(TaxState::default(), None, None, None);
        assert!(html.contains("Salariul minim pe economie"));
        assert!(html.contains("este de 4.050 RON"));
        assert!(html.contains("395.000 RON"));
        assert!(html.contains("Plafonul maxim anual pentru CASS"));
        assert!(html.contains("href=\"/setari\""));
        assert!(html.contains("setările"));
    }

    #[test]
    fn vat_percentage_is_rounded_rate() {
        assert_eq!(vat_rate_percent(), 21);
        let html = render(TaxState::default(), None, None, None);
        assert!(html.contains(&format!(
            "Cota standard de TVA este {}%.",
            (VAT_RATE * 100.0).round() as i64
        )));
    }

    #[test]
    fn warning_only_when_over_threshold() {
        let warning = "Plafonul de TVA este de";

        let html = render(TaxState::default(), Some(true), None, None);
        assert!(html.contains(warning));
        assert!(html.contains("300.000 RON"));
        assert!(html.contains("info-icon warning"));

        for flag in [Some(false), None] {
            let html = render(TaxState::default(), flag, None, None);
            assert!(!html.contains(warning));
            assert!(!html.contains("info-icon warning"));
        }
    }

    #[test]
    fn health_cap_scales_minimum_wage() {
        let state = TaxState {
            minimum_wage: 4_000.0,
            ..Default::default()
        };
        let html = render(state, None, None, None);
        let cap_before =
            format_as_base_currency(4_000.0 * f64::from(HEALTH_CAP_MAX_WAGES_BEFORE_CHANGE));
        let cap_after =
            format_as_base_currency(4_000.0 * f64::from(HEALTH_CAP_MAX_WAGES_AFTER_CHANGE));
        assert_eq!(cap_before, "240.000 RON");
        assert_eq!(cap_after, "288.000 RON");
        assert!(html.contains(&cap_before));
        assert!(html.contains(&cap_after));
        assert!(html.contains(&format!(
            "de la {} la {} salarii minime",
            HEALTH_CAP_MAX_WAGES_BEFORE_CHANGE, HEALTH_CAP_MAX_WAGES_AFTER_CHANGE
        )));
    }

    #[test]
    fn no_rates_line_without_income_currency() {
        let mut state = with_amounts(Some((10_000.0, Currency::EUR)), None);
        state.income_currency = None;
        let html = render(state, None, Some(rates()), None);
        assert!(!html.contains("de schimb folosit"));

        let mut state = with_amounts(Some((10_000.0, Currency::EUR)), None);
        state.income = None;
        let html = render(state, None, Some(rates()), None);
        assert!(!html.contains("de schimb folosit"));
    }

    #[test]
    fn no_rates_line_for_base_currency() {
        let state = with_amounts(
            Some((10_000.0, Currency::RON)),
            Some((500.0, Currency::RON)),
        );
        let html = render(state, None, Some(rates()), None);
        assert!(!html.contains("de schimb folosit"));
    }

    #[test]
    fn singular_wording_for_one_rate() {
        let state = with_amounts(
            Some((10_000.0, Currency::EUR)),
            Some((500.0, Currency::RON)),
        );
        let html = render(state, None, Some(rates()), None);
        assert!(html.contains("Cursul de schimb folosit: "));
        assert!(html.contains("1 EUR = 4,9764 RON"));
        assert!(!html.contains(" și "));
    }

    #[test]
    fn plural_wording_for_two_rates() {
        let state = with_amounts(
            Some((10_000.0, Currency::EUR)),
            Some((500.0, Currency::USD)),
        );
        let html = render(state, None, Some(rates()), None);
        assert!(html.contains("Cursurile de schimb folosite: "));
        assert!(html.contains(" și "));

        let eur = html.find("1 EUR = 4,9764 RON").unwrap();
        let usd = html.find("1 USD = 4,3127 RON").unwrap();
        assert!(eur < usd);
    }

    #[test]
    fn settings_link_keeps_href_when_opened_in_app() {
        // Event handlers need a runtime, so this one renders through a VirtualDom.
        fn host() -> Element {
            rsx! {
                SettingsInfoCard {
                    state: TaxState::default(),
                    gross_income_over_vat_threshold: None,
                    exchange_rates: None,
                    exchange_rates_loading: None,
                    on_open_settings: move |_| {},
                }
            }
        }

        let mut dom = VirtualDom::new(host);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Vezi aici <a href=\"/setari\">setările</a>."));
    }

    #[test]
    fn overlay_follows_loading_flag() {
        let html = render(TaxState::default(), None, None, Some(true));
        assert!(html.contains("rates-loading-overlay"));

        let html = render(TaxState::default(), None, None, Some(false));
        assert!(!html.contains("rates-loading-overlay"));
    }
}
