//! Disaster Map
//!
//! One Leaflet map with two overlay layers: disaster markers coloured by
//! severity and risk zone circles sized by risk level.
//!
//! Data flow:
//! 1. `main` applies the saved theme, then launches into `#map-root`.
//! 2. On mount: the map is created and a `MapController` is built around it.
//! 3. Effect 1 re-runs on every filter change and spawns both layer
//!    refreshes; each one only touches its own layer, and a response that
//!    arrives after a newer request is dropped.
//! 4. Effect 2 attaches or detaches layers when a toggle flips, without
//!    fetching.

use std::rc::Rc;

use dioxus::prelude::*;
use dmd_chart_ui::api::BrowserApi;
use dmd_chart_ui::chrome::{self, UiChrome};
use dmd_chart_ui::components::{
    AlertPlaceholder, DashboardHeader, LayerToggles, LoadingSpinner, MapFilters,
};
use dmd_chart_ui::js_bridge;
use dmd_chart_ui::state::AppState;
use dmd_chart_ui::surfaces::{LeafletSurface, MAP_CONTAINER_ID};
use dmd_core::config::DashboardConfig;
use dmd_core::FilterState;
use dmd_data::overlays::MapSpec;
use dmd_pipeline::{LayerKind, MapController};

type Controller = MapController<BrowserApi, LeafletSurface, UiChrome>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    chrome::apply_stored_theme();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("map-root"))
        .launch(App);
}

/// Fire both layer refreshes for `filter` as independent tasks.
fn refresh_all(controller: &Rc<Controller>, filter: FilterState) {
    log::info!(
        "refreshing map layers: {:?} / {:?}",
        filter.disasters_query(),
        filter.risk_assessments_query()
    );

    let disasters = Rc::clone(controller);
    let disaster_filter = filter.clone();
    spawn(async move {
        disasters.refresh_disasters(&disaster_filter).await;
    });

    let zones = Rc::clone(controller);
    spawn(async move {
        zones.refresh_risk_zones(&filter).await;
    });
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let ui = use_context_provider(UiChrome::new);

    let controller: Rc<Controller> = use_hook(|| {
        let surface = LeafletSurface::create(MAP_CONTAINER_ID, &MapSpec::default(), state.map_loading);
        Rc::new(MapController::new(
            BrowserApi::new(DashboardConfig::default()),
            surface,
            ui,
        ))
    });

    use_effect(|| {
        js_bridge::init_bootstrap_components();
        js_bridge::replace_icons();
    });

    // ─── Effect 1: refresh both layers on mount and on every filter change ───
    let refresh_controller = Rc::clone(&controller);
    use_effect(move || {
        let filter = state.filter();
        refresh_all(&refresh_controller, filter);
    });

    // ─── Effect 2: layer visibility, no fetch ───
    let toggle_controller = Rc::clone(&controller);
    use_effect(move || {
        let show_disasters = (state.show_disasters)();
        let show_zones = (state.show_risk_zones)();
        toggle_controller.set_layer_visible(LayerKind::Disasters, show_disasters);
        toggle_controller.set_layer_visible(LayerKind::RiskZones, show_zones);
    });

    let map_loading = *state.map_loading.read();

    rsx! {
        div {
            class: "container-fluid",
            DashboardHeader { title: "Disaster Map".to_string() }
            AlertPlaceholder {}
            MapFilters {}
            LayerToggles {}
            div {
                style: "position: relative;",
                div {
                    id: MAP_CONTAINER_ID,
                    style: "height: 600px; width: 100%;",
                }
                LoadingSpinner {
                    id: "map-loading".to_string(),
                    visible: map_loading,
                    message: "Loading map data...".to_string(),
                }
            }
        }
    }
}
