//! Chart card with its canvas.

use dioxus::prelude::*;

use super::ChartHeader;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the canvas (Chart.js draws into this)
    pub id: String,
    pub title: String,
    /// Info tooltip next to the title
    #[props(default = String::new())]
    pub hint: String,
    /// Whether the page is still fetching
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A Bootstrap card holding one Chart.js canvas.
///
/// The canvas is always rendered so a failed fetch leaves an empty card
/// rather than a missing one.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: {}px; position: relative; width: 100%;",
        props.min_height, props.min_height
    );

    rsx! {
        div {
            class: "card h-100",
            div {
                class: "card-body",
                ChartHeader { title: props.title.clone(), hint: props.hint.clone() }
                div {
                    class: "chart-container",
                    style: "{style}",
                    if props.loading {
                        div {
                            style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);",
                            class: "text-muted",
                            "Loading chart..."
                        }
                    }
                    canvas { id: "{props.id}" }
                }
            }
        }
    }
}
