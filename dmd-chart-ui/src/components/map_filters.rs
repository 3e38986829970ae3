//! Filter controls for the map.

use crate::state::AppState;
use dioxus::prelude::*;
use dmd_core::reference::{disaster_type_options, state_options};
use dmd_core::RiskLevel;

/// Disaster type, state, active-only and minimum risk level controls.
/// Each change writes its signal; the map app re-fetches from there.
#[component]
pub fn MapFilters() -> Element {
    let mut state = use_context::<AppState>();
    let selected_type = (state.disaster_type)();
    let selected_state = (state.state_filter)();
    let active_only = (state.active_only)();
    let min_risk = (state.min_risk_level)();

    let on_type_change = move |evt: Event<FormData>| {
        state.disaster_type.set(evt.value());
    };

    let on_state_change = move |evt: Event<FormData>| {
        state.state_filter.set(evt.value());
    };

    let on_active_change = move |evt: Event<FormData>| {
        state.active_only.set(evt.checked());
    };

    let on_risk_change = move |evt: Event<FormData>| {
        if let Ok(level) = evt.value().parse::<i32>() {
            state.min_risk_level.set(level);
        }
    };

    rsx! {
        div {
            class: "row g-2 align-items-end mb-3",
            div {
                class: "col-md-3",
                label { r#for: "disaster-type-filter", class: "form-label", "Disaster Type" }
                select {
                    id: "disaster-type-filter",
                    class: "form-select",
                    onchange: on_type_change,
                    option { value: "", selected: selected_type.is_empty(), "All Types" }
                    for opt in disaster_type_options() {
                        option {
                            value: "{opt.value}",
                            selected: opt.value == selected_type,
                            "{opt.label}"
                        }
                    }
                }
            }
            div {
                class: "col-md-3",
                label { r#for: "state-filter", class: "form-label", "State" }
                select {
                    id: "state-filter",
                    class: "form-select",
                    onchange: on_state_change,
                    option { value: "", selected: selected_state.is_empty(), "All States" }
                    for opt in state_options() {
                        option {
                            value: "{opt.value}",
                            selected: opt.value == selected_state,
                            "{opt.label}"
                        }
                    }
                }
            }
            div {
                class: "col-md-3",
                label { r#for: "min-risk-filter", class: "form-label", "Minimum Risk Level" }
                select {
                    id: "min-risk-filter",
                    class: "form-select",
                    onchange: on_risk_change,
                    for level in RiskLevel::ALL {
                        option {
                            value: "{level.value()}",
                            selected: level.value() == min_risk,
                            "{level.value()} - {level.description()}"
                        }
                    }
                }
            }
            div {
                class: "col-md-3",
                div {
                    class: "form-check form-switch",
                    input {
                        id: "active-only-filter",
                        class: "form-check-input",
                        r#type: "checkbox",
                        checked: active_only,
                        onchange: on_active_change,
                    }
                    label { r#for: "active-only-filter", class: "form-check-label", "Active only" }
                }
            }
        }
    }
}
