//! Disaster Statistics
//!
//! Fetches the aggregate counts once and draws four Chart.js charts:
//! disasters by type (doughnut), by state (top 10 bar), by month (line)
//! and the risk level distribution (polar area).
//!
//! Data flow:
//! 1. `main` applies the saved theme, then launches into `#statistics-root`.
//! 2. On mount: one `GET /api/statistics`.
//! 3. On success the controller renders every chart; on failure it raises
//!    a single banner and the canvases stay empty. There is no retry.

use dioxus::prelude::*;
use dmd_chart_ui::api::BrowserApi;
use dmd_chart_ui::chrome::{self, UiChrome};
use dmd_chart_ui::components::{
    AlertFilterForm, AlertPlaceholder, ChartContainer, DashboardHeader, SummaryCards,
};
use dmd_chart_ui::js_bridge;
use dmd_chart_ui::state::AppState;
use dmd_chart_ui::surfaces::ChartJsSurface;
use dmd_core::config::DashboardConfig;
use dmd_data::charts::{MONTH_CHART_ID, RISK_CHART_ID, STATE_CHART_ID, TYPE_CHART_ID};
use dmd_pipeline::StatisticsController;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    chrome::apply_stored_theme();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("statistics-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let ui = use_context_provider(UiChrome::new);

    // One fetch on mount; nothing here is reactive afterwards.
    use_effect(move || {
        js_bridge::init_scripts();
        js_bridge::init_bootstrap_components();
        js_bridge::replace_icons();

        spawn(async move {
            let controller =
                StatisticsController::new(BrowserApi::new(DashboardConfig::default()), ChartJsSurface, ui);
            match controller.load().await {
                Ok(summary) => state.summary.set(Some(summary)),
                Err(e) => log::warn!("statistics page left empty: {}", e),
            }
            state.loading.set(false);
        });
    });

    let loading = *state.loading.read();
    let summary = state.summary.read().clone();

    rsx! {
        div {
            class: "container-fluid",
            DashboardHeader { title: "Disaster Statistics".to_string() }
            AlertPlaceholder {}

            if let Some(summary) = summary {
                SummaryCards { summary }
            }

            div {
                class: "row g-4",
                div {
                    class: "col-lg-6",
                    ChartContainer {
                        id: TYPE_CHART_ID.to_string(),
                        title: "Disasters by Type".to_string(),
                        hint: "Share of all recorded disasters".to_string(),
                        loading,
                    }
                }
                div {
                    class: "col-lg-6",
                    ChartContainer {
                        id: STATE_CHART_ID.to_string(),
                        title: "Disasters by State".to_string(),
                        hint: "Ten states with the most disasters".to_string(),
                        loading,
                    }
                }
                div {
                    class: "col-lg-6",
                    ChartContainer {
                        id: MONTH_CHART_ID.to_string(),
                        title: "Disasters by Month".to_string(),
                        hint: "Disasters by start month".to_string(),
                        loading,
                    }
                }
                div {
                    class: "col-lg-6",
                    ChartContainer {
                        id: RISK_CHART_ID.to_string(),
                        title: "Risk Level Distribution".to_string(),
                        hint: "Risk assessments at each level".to_string(),
                        loading,
                    }
                }
            }

            div {
                class: "card mt-4",
                div {
                    class: "card-body",
                    h5 { class: "card-title", "Filter Alerts" }
                    AlertFilterForm {}
                }
            }
        }
    }
}
