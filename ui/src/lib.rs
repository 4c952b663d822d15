// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

mod app_state;
mod app_state_mut;
pub mod components;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use fiscal::settings::Settings;
use screens::calculator::CalculatorScreen;
use screens::settings::SettingsScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Calculator,
    Settings,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Calculator => "Calculator",
            Screen::Settings => "Setări",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 2] = [Screen::Calculator, Screen::Settings];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .nowrap { white-space: nowrap; }

    .settings-info-card .info-line { margin-bottom: 0.25rem; }
    .settings-info-card .info-icon { flex-shrink: 0; color: var(--pico-muted-color); }
    .settings-info-card .info-icon.warning { color: var(--pico-del-color); }
"#;

    let settings = use_hook(Settings::from_env);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{responsive_css}"
        }
        LoadedApp {
            app_state: AppState::new(settings),
        }
    }
}

/// This component holds the main app logic.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    use_hook(|| info!("settings: {:#?}", app_state.settings));

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let tax_state_signal = use_signal(|| app_state.settings.tax_state());
    let exchange_rates_signal = use_signal(|| None);
    let exchange_rates_loading_signal = use_signal(|| true);

    use_context_provider(|| AppStateMut {
        tax_state: tax_state_signal,
        exchange_rates: exchange_rates_signal,
        exchange_rates_loading: exchange_rates_loading_signal,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    // Rates are seeded from the start-up settings; a remote source would be
    // awaited here instead.
    let seed_rates = app_state.settings.exchange_rates.clone();
    let rates_resource = use_resource(move || {
        let seed_rates = seed_rates.clone();
        async move { seed_rates }
    });

    use_effect(move || {
        let resolved = rates_resource.read();
        match resolved.as_ref() {
            None => app_state_mut.exchange_rates_loading.set(true),
            Some(rates) => {
                debug!(
                    "exchange rates ready: {} entries",
                    rates.as_ref().map_or(0, |rates| rates.len())
                );
                if app_state_mut.exchange_rates.peek().as_ref() != rates.as_ref() {
                    app_state_mut.exchange_rates.set(rates.clone());
                }
                app_state_mut.exchange_rates_loading.set(false);
            }
        }
    });

    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    use_effect(move || debug!("active screen: {:?}", active_screen()));

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            strong { "Calculator PFA" }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Calculator => rsx! {
                        CalculatorScreen {}
                    },
                    Screen::Settings => rsx! {
                        SettingsScreen {}
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_has_a_tab() {
        assert_eq!(ALL_SCREENS.len(), 2);
        assert!(ALL_SCREENS.contains(&Screen::default()));
        assert_eq!(Screen::Settings.name(), "Setări");
    }
}
