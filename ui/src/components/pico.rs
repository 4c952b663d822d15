//! Lifetime-free Dioxus wrappers around the Pico.css building blocks used by
//! the calculator. Pico must be linked by the application shell.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout; children become equal-width columns.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    rsx! {
        article {
            class: "{class}",
            style: "{style}",
            {children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        format!("{} outline", props.button_type.to_class())
    } else {
        props.button_type.to_class().to_string()
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct NumberInputProps {
    label: String,
    name: String,
    /// Current value; `None` renders an empty field.
    #[props(!optional)]
    value: Option<f64>,
    /// Called with the parsed value, or `None` when the field does not hold a number.
    on_change: EventHandler<Option<f64>>,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = "1".to_string())]
    step: String,
}

/// A labeled numeric field accepting both `.` and `,` as decimal separator.
pub fn NumberInput(props: NumberInputProps) -> Element {
    let shown = props.value.map(|v| v.to_string()).unwrap_or_default();
    let on_change = props.on_change;
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "number",
                inputmode: "decimal",
                min: "0",
                step: "{props.step}",
                name: "{props.name}",
                value: "{shown}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                oninput: move |evt: FormEvent| on_change.call(parse_number(&evt.value())),
            }
        }
    }
}

/// Parses user input as a number. Accepts `,` as the decimal separator.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
