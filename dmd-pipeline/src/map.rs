//! Map refresh pipeline.

use std::cell::RefCell;

use dmd_core::FilterState;
use dmd_data::overlays::{self, MarkerSpec, ZoneSpec};
use log::{debug, error, info};

use crate::api::HazardApi;
use crate::layer::{LayerKind, LayerState, OverlayLayer};
use crate::notify::{AlertLevel, Notifier};

pub const DISASTER_LOAD_ERROR: &str = "Error loading disaster data. Please try again.";
pub const RISK_ZONE_LOAD_ERROR: &str = "Error loading risk zone data. Please try again.";

/// The map as the pipeline sees it.
pub trait MapSurface {
    /// Remove every graphic from a layer.
    fn clear_layer(&self, layer: LayerKind);
    fn add_markers(&self, markers: &[MarkerSpec]);
    fn add_zones(&self, zones: &[ZoneSpec]);
    /// Attach a layer to the map or detach it, keeping its contents.
    fn set_layer_attached(&self, layer: LayerKind, attached: bool);
    fn set_loading(&self, loading: bool);
}

/// Owns the two overlay layers and drives their refreshes.
///
/// Methods take `&self`; layer state sits in `RefCell`s and is never
/// borrowed across an await, so both refreshes can be in flight at once.
pub struct MapController<A, S, N> {
    api: A,
    surface: S,
    notifier: N,
    disasters: RefCell<OverlayLayer>,
    risk_zones: RefCell<OverlayLayer>,
}

impl<A, S, N> MapController<A, S, N>
where
    A: HazardApi,
    S: MapSurface,
    N: Notifier,
{
    pub fn new(api: A, surface: S, notifier: N) -> Self {
        Self {
            api,
            surface,
            notifier,
            disasters: RefCell::new(OverlayLayer::new()),
            risk_zones: RefCell::new(OverlayLayer::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }

    fn layer(&self, kind: LayerKind) -> &RefCell<OverlayLayer> {
        match kind {
            LayerKind::Disasters => &self.disasters,
            LayerKind::RiskZones => &self.risk_zones,
        }
    }

    pub fn layer_state(&self, kind: LayerKind) -> LayerState {
        self.layer(kind).borrow().state()
    }

    pub fn is_layer_visible(&self, kind: LayerKind) -> bool {
        self.layer(kind).borrow().is_visible()
    }

    fn sync_loading(&self) {
        let loading = self.disasters.borrow().is_loading() || self.risk_zones.borrow().is_loading();
        self.surface.set_loading(loading);
    }

    /// Show or hide a layer without fetching anything.
    pub fn set_layer_visible(&self, kind: LayerKind, visible: bool) {
        let changed = self.layer(kind).borrow_mut().set_visible(visible);
        if changed {
            debug!("{} layer visible: {}", kind.label(), visible);
            self.surface.set_layer_attached(kind, visible);
        }
    }

    /// Re-fetch disasters for `filter` and redraw the marker layer.
    pub async fn refresh_disasters(&self, filter: &FilterState) {
        let ticket = self.disasters.borrow_mut().begin_load();
        self.sync_loading();

        let result = self.api.disasters(filter).await;

        match result {
            Ok(records) => {
                let markers = overlays::markers(&records);
                if !self.disasters.borrow_mut().finish_populated(ticket, markers.len()) {
                    debug!("dropping stale disaster response #{}", ticket.value());
                    return;
                }
                self.surface.clear_layer(LayerKind::Disasters);
                self.surface.add_markers(&markers);
                info!("disaster layer: {} markers", markers.len());
            }
            Err(e) => {
                let kept = {
                    let mut layer = self.disasters.borrow_mut();
                    if !layer.finish_failed(ticket) {
                        debug!("dropping stale disaster error #{}: {}", ticket.value(), e);
                        return;
                    }
                    layer.items()
                };
                error!("Error loading disaster data: {} (keeping {} markers)", e, kept);
                self.notifier.show_alert(DISASTER_LOAD_ERROR, AlertLevel::Danger);
            }
        }
        self.sync_loading();
    }

    /// Re-fetch risk assessments for `filter` and redraw the zone layer.
    pub async fn refresh_risk_zones(&self, filter: &FilterState) {
        let ticket = self.risk_zones.borrow_mut().begin_load();
        self.sync_loading();

        let result = self.api.risk_assessments(filter).await;

        match result {
            Ok(records) => {
                let zones = overlays::zones(&records);
                if !self.risk_zones.borrow_mut().finish_populated(ticket, zones.len()) {
                    debug!("dropping stale risk zone response #{}", ticket.value());
                    return;
                }
                self.surface.clear_layer(LayerKind::RiskZones);
                self.surface.add_zones(&zones);
                info!("risk zone layer: {} zones", zones.len());
            }
            Err(e) => {
                let kept = {
                    let mut layer = self.risk_zones.borrow_mut();
                    if !layer.finish_failed(ticket) {
                        debug!("dropping stale risk zone error #{}: {}", ticket.value(), e);
                        return;
                    }
                    layer.items()
                };
                error!("Error loading risk zones: {} (keeping {} zones)", e, kept);
                self.notifier.show_alert(RISK_ZONE_LOAD_ERROR, AlertLevel::Danger);
            }
        }
        self.sync_loading();
    }
}
