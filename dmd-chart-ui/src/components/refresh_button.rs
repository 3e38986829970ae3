//! Reload button.

use dioxus::prelude::*;

use crate::chrome;

/// Disables itself, shows a spinner, then reloads the page.
#[component]
pub fn RefreshButton() -> Element {
    let mut busy = use_signal(|| false);

    let on_click = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(chrome::reload_after_delay());
    };

    rsx! {
        button {
            id: "refresh-data-btn",
            r#type: "button",
            class: "btn btn-primary btn-sm",
            disabled: busy(),
            onclick: on_click,
            if busy() {
                span {
                    class: "spinner-border spinner-border-sm me-1",
                    role: "status",
                    "aria-hidden": "true",
                }
                "Refreshing..."
            } else {
                "Refresh Data"
            }
        }
    }
}
