//! Light/dark switch.

use dioxus::prelude::*;

use crate::chrome;

#[component]
pub fn ThemeToggle() -> Element {
    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "btn btn-outline-secondary btn-sm",
            "data-bs-toggle": "tooltip",
            title: "Toggle light/dark theme",
            onclick: move |_| {
                chrome::toggle_theme();
            },
            i { "data-feather": "moon" }
        }
    }
}
