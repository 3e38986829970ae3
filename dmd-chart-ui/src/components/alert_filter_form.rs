//! Alert filter form.
//!
//! Unlike the map filters this one reloads the page: submitting navigates
//! to the current URL with the chosen filter in the query string.

use dioxus::prelude::*;
use dmd_core::reference::{disaster_type_options, state_options};
use dmd_core::FilterState;

use crate::chrome;

#[component]
pub fn AlertFilterForm() -> Element {
    let mut disaster_type = use_signal(String::new);
    let mut region = use_signal(String::new);
    let mut active_only = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let filter = FilterState::default()
            .with_disaster_type(disaster_type())
            .with_state(region())
            .with_active_only(active_only());
        chrome::navigate_with_alert_filter(&filter);
    };

    rsx! {
        form {
            id: "alert-filter-form",
            class: "row g-2 align-items-end",
            onsubmit: on_submit,
            div {
                class: "col-auto",
                select {
                    name: "disaster_type",
                    class: "form-select form-select-sm",
                    onchange: move |evt: Event<FormData>| disaster_type.set(evt.value()),
                    option { value: "", "All Types" }
                    for opt in disaster_type_options() {
                        option { value: "{opt.value}", "{opt.label}" }
                    }
                }
            }
            div {
                class: "col-auto",
                select {
                    name: "state",
                    class: "form-select form-select-sm",
                    onchange: move |evt: Event<FormData>| region.set(evt.value()),
                    option { value: "", "All States" }
                    for opt in state_options() {
                        option { value: "{opt.value}", "{opt.label}" }
                    }
                }
            }
            div {
                class: "col-auto form-check",
                input {
                    id: "alert-active-only",
                    name: "active_only",
                    class: "form-check-input",
                    r#type: "checkbox",
                    onchange: move |evt: Event<FormData>| active_only.set(evt.checked()),
                }
                label { r#for: "alert-active-only", class: "form-check-label", "Active only" }
            }
            div {
                class: "col-auto",
                button { r#type: "submit", class: "btn btn-sm btn-outline-primary", "Filter Alerts" }
            }
        }
    }
}
