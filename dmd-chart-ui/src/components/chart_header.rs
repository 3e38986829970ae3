//! Section header with an optional info tooltip.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Tooltip text for the info icon; no icon when empty
    #[props(default = String::new())]
    pub hint: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            class: "d-flex align-items-center mb-2",
            h5 {
                class: "card-title mb-0",
                "{props.title}"
            }
            if !props.hint.is_empty() {
                span {
                    class: "ms-2 text-muted",
                    "data-bs-toggle": "tooltip",
                    title: "{props.hint}",
                    i { "data-feather": "info" }
                }
            }
        }
    }
}
