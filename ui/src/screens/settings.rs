//=============================================================================
// File: src/screens/settings.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::currency_select::CurrencySelect;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::NumberInput;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use fiscal::config::BASE_CURRENCY;
use fiscal::currency::Currency;

#[component]
pub fn SettingsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let active_screen = use_context::<Signal<Screen>>();

    let mut new_rate_currency = use_signal::<Option<Currency>>(|| None);
    let mut new_rate_value = use_signal::<Option<f64>>(|| None);

    let snapshot = app_state_mut.tax_state.read().clone();
    let mut rates: Vec<(Currency, f64)> = app_state_mut
        .exchange_rates
        .read()
        .as_ref()
        .map(|rates| rates.iter().collect())
        .unwrap_or_default();
    rates.sort_by_key(|(currency, _)| currency.code());
    let no_rates = rates.is_empty();

    let can_add = matches!(
        (new_rate_currency(), new_rate_value()),
        (Some(currency), Some(rate)) if currency != BASE_CURRENCY && rate > 0.0
    );

    rsx! {
        Card {
            h3 { "Setări" }
            Grid {
                NumberInput {
                    label: "Plafon TVA (RON)",
                    name: "vat_threshold",
                    value: Some(snapshot.vat_threshold),
                    on_change: move |value: Option<f64>| {
                        if let Some(value) = value {
                            app_state_mut.tax_state.write().vat_threshold = value;
                        }
                    },
                }
                NumberInput {
                    label: "Salariul minim (RON)",
                    name: "minimum_wage",
                    value: Some(snapshot.minimum_wage),
                    on_change: move |value: Option<f64>| {
                        if let Some(value) = value {
                            app_state_mut.tax_state.write().minimum_wage = value;
                        }
                    },
                }
            }

            h4 { "Cursuri de schimb (RON pentru o unitate)" }
            if no_rates {
                p { "Nu există cursuri de schimb." }
            }
            for (currency, rate) in rates {
                Grid {
                    key: "{currency}",
                    NumberInput {
                        label: "{currency}",
                        name: "rate_{currency}",
                        step: "0.0001",
                        value: Some(rate),
                        on_change: move |value: Option<f64>| {
                            if let Some(value) = value.filter(|v| *v > 0.0) {
                                if let Some(rates) = &mut *app_state_mut.exchange_rates.write() {
                                    rates.insert(currency, value);
                                }
                            }
                        },
                    }
                    Button {
                        button_type: ButtonType::Contrast,
                        outline: true,
                        on_click: move |_| {
                            if let Some(rates) = &mut *app_state_mut.exchange_rates.write() {
                                rates.remove(currency);
                            }
                        },
                        "Șterge {currency}"
                    }
                }
            }
            Grid {
                CurrencySelect {
                    label: "Monedă nouă",
                    selected: new_rate_currency(),
                    on_change: move |currency| new_rate_currency.set(currency),
                }
                NumberInput {
                    label: "Curs",
                    name: "new_rate",
                    step: "0.0001",
                    value: new_rate_value(),
                    on_change: move |value| new_rate_value.set(value),
                }
            }
            footer {
                Button {
                    disabled: !can_add,
                    on_click: move |_| {
                        if let (true, Some(currency), Some(rate)) =
                            (can_add, new_rate_currency(), new_rate_value())
                        {
                            app_state_mut
                                .exchange_rates
                                .write()
                                .get_or_insert_with(Default::default)
                                .insert(currency, rate);
                            new_rate_currency.set(None);
                            new_rate_value.set(None);
                        }
                    },
                    "Adaugă cursul"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        let defaults = &app_state.settings;
                        info!("restoring start-up settings");
                        app_state_mut.tax_state.with_mut(|state| {
                            state.vat_threshold = defaults.vat_threshold;
                            state.minimum_wage = defaults.minimum_wage;
                        });
                        app_state_mut.exchange_rates.set(defaults.exchange_rates.clone());
                    },
                    "Restabilește valorile inițiale"
                }
            }
            p {
                ActionLink {
                    state: active_screen,
                    to: Screen::Calculator,
                    "Înapoi la calculator"
                }
            }
        }
    }
}
