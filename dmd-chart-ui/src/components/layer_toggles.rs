//! Overlay visibility switches.

use crate::state::AppState;
use dioxus::prelude::*;
use dmd_pipeline::LayerKind;

#[component]
pub fn LayerToggles() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "d-flex gap-3 mb-2",
            for kind in [LayerKind::Disasters, LayerKind::RiskZones] {
                div {
                    key: "{kind.js_name()}",
                    class: "form-check form-switch",
                    input {
                        id: "{kind.toggle_id()}",
                        class: "form-check-input",
                        r#type: "checkbox",
                        checked: *state.layer_toggle(kind).read(),
                        onchange: move |evt: Event<FormData>| {
                            state.layer_toggle(kind).set(evt.checked());
                        },
                    }
                    label {
                        r#for: "{kind.toggle_id()}",
                        class: "form-check-label",
                        "{kind.label()}"
                    }
                }
            }
        }
    }
}
