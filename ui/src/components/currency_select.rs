#![allow(non_snake_case)]

use dioxus::prelude::*;
use fiscal::currency::Currency;
use strum::IntoEnumIterator;

#[derive(PartialEq, Clone, Copy)]
pub struct CurrencyInfo {
    pub short_name: &'static str,
    pub long_name: &'static str,
}

impl From<Currency> for CurrencyInfo {
    fn from(currency: Currency) -> Self {
        Self {
            short_name: currency.code(),
            long_name: currency.name(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    pub label: String,
    /// The selected currency; `None` shows the placeholder entry.
    #[props(!optional)]
    pub selected: Option<Currency>,
    pub on_change: EventHandler<Option<Currency>>,
}

/// A `<select>` over every supported currency, base currency first.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    let on_change = props.on_change;
    let options: Vec<CurrencyInfo> = Currency::iter().map(CurrencyInfo::from).collect();
    let selected_code = props.selected.map(|c| c.code()).unwrap_or("");

    rsx! {
        label {
            "{props.label}",
            select {
                onchange: move |evt: FormEvent| {
                    on_change.call(Currency::from_code(&evt.value()).ok());
                },
                option {
                    value: "",
                    disabled: true,
                    selected: selected_code.is_empty(),
                    "Alege moneda"
                }
                for info in options {
                    option {
                        key: "{info.short_name}",
                        value: "{info.short_name}",
                        selected: info.short_name == selected_code,
                        "{info.short_name} - {info.long_name}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_info_uses_code_and_name() {
        let info = CurrencyInfo::from(Currency::EUR);
        assert_eq!(info.short_name, "EUR");
        assert_eq!(info.long_name, "Euro");
    }
}
