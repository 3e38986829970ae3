//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use dmd_core::filter::MIN_RISK_LEVEL_FLOOR;
use dmd_core::statistics::StatisticsSummary;
use dmd_core::FilterState;
use dmd_pipeline::LayerKind;

/// Shared application state for both dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the page is still waiting on its first fetch
    pub loading: Signal<bool>,
    /// Statistics summary (None until loaded)
    pub summary: Signal<Option<StatisticsSummary>>,
    /// Selected disaster type id, empty for all
    pub disaster_type: Signal<String>,
    /// Selected state id, empty for all
    pub state_filter: Signal<String>,
    pub active_only: Signal<bool>,
    pub min_risk_level: Signal<i32>,
    pub show_disasters: Signal<bool>,
    pub show_risk_zones: Signal<bool>,
    /// True while any overlay layer is loading
    pub map_loading: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            summary: Signal::new(None),
            disaster_type: Signal::new(String::new()),
            state_filter: Signal::new(String::new()),
            active_only: Signal::new(false),
            min_risk_level: Signal::new(MIN_RISK_LEVEL_FLOOR),
            show_disasters: Signal::new(true),
            show_risk_zones: Signal::new(true),
            map_loading: Signal::new(false),
        }
    }

    /// Snapshot of the filter controls.
    ///
    /// Reading subscribes the caller, so an effect that calls this re-runs
    /// on every filter change.
    pub fn filter(&self) -> FilterState {
        FilterState::default()
            .with_disaster_type((self.disaster_type)())
            .with_state((self.state_filter)())
            .with_active_only((self.active_only)())
            .with_min_risk_level((self.min_risk_level)())
    }

    pub fn layer_toggle(&self, kind: LayerKind) -> Signal<bool> {
        match kind {
            LayerKind::Disasters => self.show_disasters,
            LayerKind::RiskZones => self.show_risk_zones,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
