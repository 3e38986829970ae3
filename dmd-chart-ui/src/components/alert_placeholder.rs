//! Alert banners.

use dioxus::prelude::*;

use crate::chrome::UiChrome;

/// Renders every live notice from the `UiChrome` in context.
#[component]
pub fn AlertPlaceholder() -> Element {
    let chrome = use_context::<UiChrome>();
    let notices: Vec<(u64, String, String)> = chrome
        .notices()
        .read()
        .iter()
        .map(|n| {
            (
                n.id,
                format!("alert alert-{} alert-dismissible fade show", n.level.as_class()),
                n.message.clone(),
            )
        })
        .collect();

    rsx! {
        div {
            id: "alert-placeholder",
            for (id, class, message) in notices {
                div {
                    key: "{id}",
                    class: "{class}",
                    role: "alert",
                    "{message}"
                    button {
                        r#type: "button",
                        class: "btn-close",
                        "aria-label": "Close",
                        onclick: move |_| chrome.dismiss(id),
                    }
                }
            }
        }
    }
}
