//=============================================================================
// File: src/screens/calculator.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::currency_select::CurrencySelect;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::NumberInput;
use crate::components::settings_info_card::SettingsInfoCard;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn CalculatorScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    // One snapshot per render; the info card never sees the signals.
    let snapshot = app_state_mut.tax_state.read().clone();
    let exchange_rates = app_state_mut.exchange_rates.read().clone();
    let exchange_rates_loading = *app_state_mut.exchange_rates_loading.read();
    let over_threshold = app_state_mut.gross_income_over_vat_threshold();

    rsx! {
        Card {
            h3 { "Venituri și cheltuieli" }
            Grid {
                NumberInput {
                    label: "Venit brut anual",
                    name: "income",
                    value: snapshot.income,
                    on_change: move |value| app_state_mut.tax_state.write().income = value,
                }
                CurrencySelect {
                    label: "Moneda venitului",
                    selected: snapshot.income_currency,
                    on_change: move |currency| app_state_mut.tax_state.write().income_currency = currency,
                }
            }
            Grid {
                NumberInput {
                    label: "Cheltuieli deductibile",
                    name: "deductible_expenses",
                    value: snapshot.deductible_expenses,
                    on_change: move |value| app_state_mut.tax_state.write().deductible_expenses = value,
                }
                CurrencySelect {
                    label: "Moneda cheltuielilor",
                    selected: snapshot.deductible_expenses_currency,
                    on_change: move |currency| {
                        app_state_mut.tax_state.write().deductible_expenses_currency = currency
                    },
                }
            }
        }
        SettingsInfoCard {
            state: snapshot.clone(),
            gross_income_over_vat_threshold: over_threshold,
            exchange_rates,
            exchange_rates_loading: Some(exchange_rates_loading),
            on_open_settings: move |_| active_screen.set(Screen::Settings),
        }
    }
}
