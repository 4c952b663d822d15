use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Target for the browser when no in-app navigation is wired up.
    #[props(default = "#".to_string(), into)]
    pub href: String,

    #[props(optional)]
    pub state: Option<Signal<Screen>>,

    #[props(optional)]
    pub to: Option<Screen>,

    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

impl ActionLinkProps {
    /// Whether a click stays in the app instead of following `href`.
    pub fn handled_in_app(&self) -> bool {
        (self.state.is_some() && self.to.is_some()) || self.onclick.is_some()
    }
}

/// A link that switches screens in-app when it has somewhere to go, and
/// otherwise behaves as a plain anchor.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let handled_in_app = props.handled_in_app();

    rsx! {
        a {
            href: "{props.href}",
            onclick: move |evt: MouseEvent| {
                if !handled_in_app {
                    return;
                }
                evt.prevent_default();

                if let (Some(mut state_signal), Some(target)) = (props.state, &props.to) {
                    state_signal.set(*target);
                }

                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
