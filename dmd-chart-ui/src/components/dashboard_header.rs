//! Page title bar with the chrome controls.

use dioxus::prelude::*;

use super::{RefreshButton, ThemeToggle};

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            class: "d-flex justify-content-between align-items-center py-3 mb-3 border-bottom",
            h1 { class: "h3 mb-0", "{props.title}" }
            div {
                class: "d-flex gap-2",
                RefreshButton {}
                ThemeToggle {}
            }
        }
    }
}
