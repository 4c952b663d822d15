use dioxus::prelude::*;

/// Covers its positioned parent with a busy indicator while exchange rates load.
#[component]
pub fn ExchangeRatesLoadingOverlay(#[props(!optional)] exchange_rates_loading: Option<bool>) -> Element {
    rsx! {
        if exchange_rates_loading == Some(true) {
            div {
                class: "rates-loading-overlay",
                role: "status",
                "aria-busy": "true",
                "aria-label": "Se încarcă cursurile de schimb",
                style: "
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: inherit;
                    background-color: color-mix(in srgb, var(--pico-background-color), transparent 30%);
                    z-index: 2;
                ",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_only_while_loading() {
        let loading = dioxus_ssr::render_element(rsx! {
            ExchangeRatesLoadingOverlay { exchange_rates_loading: Some(true) }
        });
        assert!(loading.contains("rates-loading-overlay"));
        assert!(loading.contains("aria-busy=\"true\""));

        for flag in [Some(false), None] {
            let html = dioxus_ssr::render_element(rsx! {
                ExchangeRatesLoadingOverlay { exchange_rates_loading: flag }
            });
            assert!(!html.contains("rates-loading-overlay"));
        }
    }
}
