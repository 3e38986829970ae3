//! Loading overlay.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    pub id: String,
    pub visible: bool,
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Bootstrap spinner overlay, present in the DOM but hidden when idle.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let display = if props.visible { "flex" } else { "none" };

    rsx! {
        div {
            id: "{props.id}",
            class: "justify-content-center align-items-center",
            style: "display: {display}; position: absolute; inset: 0; z-index: 1000; background: rgba(0, 0, 0, 0.3);",
            div {
                class: "spinner-border text-light",
                role: "status",
                span { class: "visually-hidden", "{props.message}" }
            }
        }
    }
}
