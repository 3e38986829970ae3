//! Pipeline surfaces backed by the JS bridge.

use dioxus::prelude::*;
use dmd_data::charts::ChartSpec;
use dmd_data::overlays::{MapSpec, MarkerSpec, ZoneSpec};
use dmd_pipeline::{ChartSurface, LayerKind, MapSurface};
use serde_json::json;

use crate::js_bridge;

/// DOM id of the Leaflet map container.
pub const MAP_CONTAINER_ID: &str = "map-container";

/// Draws charts with Chart.js.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsSurface;

impl ChartSurface for ChartJsSurface {
    fn render_chart(&self, spec: &ChartSpec) {
        match serde_json::to_string(&spec.config) {
            Ok(config) => js_bridge::render_chart(spec.canvas_id, &config),
            Err(e) => log::error!("chart config for {} not serializable: {}", spec.canvas_id, e),
        }
    }
}

/// A Leaflet map plus the signal behind its loading overlay.
#[derive(Clone, Copy)]
pub struct LeafletSurface {
    container_id: &'static str,
    loading: Signal<bool>,
}

impl LeafletSurface {
    /// Create the map in `container_id`. Commands sent before Leaflet is
    /// ready are queued on the JS side.
    pub fn create(container_id: &'static str, spec: &MapSpec, loading: Signal<bool>) -> Self {
        match serde_json::to_string(spec) {
            Ok(spec_json) => js_bridge::init_map(container_id, &spec_json),
            Err(e) => log::error!("map spec not serializable: {}", e),
        }
        Self {
            container_id,
            loading,
        }
    }

    fn send(&self, command: &str, payload: serde_json::Value) {
        js_bridge::map_command(self.container_id, command, &payload.to_string());
    }
}

impl MapSurface for LeafletSurface {
    fn clear_layer(&self, layer: LayerKind) {
        self.send("clear", json!({ "layer": layer.js_name() }));
    }

    fn add_markers(&self, markers: &[MarkerSpec]) {
        self.send("markers", json!({ "items": markers }));
    }

    fn add_zones(&self, zones: &[ZoneSpec]) {
        self.send("zones", json!({ "items": zones }));
    }

    fn set_layer_attached(&self, layer: LayerKind, attached: bool) {
        self.send(
            "attach",
            json!({ "layer": layer.js_name(), "attached": attached }),
        );
    }

    fn set_loading(&self, loading: bool) {
        let mut signal = self.loading;
        if *signal.peek() != loading {
            signal.set(loading);
        }
    }
}
