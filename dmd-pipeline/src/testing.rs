//! In-memory stand-ins for the browser seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use chrono::NaiveDate;
use dmd_core::disaster::Disaster;
use dmd_core::risk_assessment::RiskAssessment;
use dmd_core::statistics::StatisticsSummary;
use dmd_core::filter::MIN_RISK_LEVEL_FLOOR;
use dmd_core::{ApiError, FilterState};
use dmd_data::charts::ChartSpec;
use dmd_data::overlays::{MarkerSpec, ZoneSpec};
use tokio::sync::oneshot;

use crate::api::HazardApi;
use crate::layer::LayerKind;
use crate::map::MapSurface;
use crate::notify::{AlertLevel, Notifier};
use crate::statistics::ChartSurface;

pub fn disaster(title: &str, state: &str, severity: i32) -> Disaster {
    Disaster {
        id: None,
        title: title.to_string(),
        disaster_type: "Flood".to_string(),
        state: state.to_string(),
        latitude: Some(3.0),
        longitude: Some(101.5),
        start_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        end_date: None,
        is_active: true,
        severity: Some(severity),
        description: None,
    }
}

pub fn risk_assessment(location: &str, risk_level: i32) -> RiskAssessment {
    RiskAssessment {
        id: None,
        location_name: Some(location.to_string()),
        state: "Kelantan".to_string(),
        disaster_type: "Flood".to_string(),
        latitude: 6.1,
        longitude: 102.2,
        risk_level: Some(risk_level),
        last_assessed: NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
        details: None,
    }
}

/// Backend double. Filters disasters by state name like the real backend
/// filters by state id.
#[derive(Default)]
pub struct MockApi {
    pub disasters: Vec<Disaster>,
    pub assessments: Vec<RiskAssessment>,
    pub statistics: StatisticsSummary,
    pub failure: RefCell<Option<ApiError>>,
    pub requests: Cell<usize>,
    pub risk_filters: RefCell<Vec<FilterState>>,
    pub gates: RefCell<VecDeque<oneshot::Receiver<Vec<Disaster>>>>,
}

impl MockApi {
    pub fn with_disasters(disasters: Vec<Disaster>) -> Self {
        Self {
            disasters,
            ..Self::default()
        }
    }

    pub fn with_assessments(assessments: Vec<RiskAssessment>) -> Self {
        Self {
            assessments,
            ..Self::default()
        }
    }

    pub fn with_statistics(statistics: StatisticsSummary) -> Self {
        Self {
            statistics,
            ..Self::default()
        }
    }

    /// Make every following request fail with `error`.
    pub fn fail_with(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Hold the next disasters request until `rx` yields its response.
    pub fn gate(&self, rx: oneshot::Receiver<Vec<Disaster>>) {
        self.gates.borrow_mut().push_back(rx);
    }

    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    fn record(&self) -> Result<(), ApiError> {
        self.requests.set(self.requests.get() + 1);
        match self.failure.borrow().as_ref() {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl HazardApi for MockApi {
    async fn statistics(&self) -> Result<StatisticsSummary, ApiError> {
        self.record()?;
        Ok(self.statistics.clone())
    }

    async fn disasters(&self, filter: &FilterState) -> Result<Vec<Disaster>, ApiError> {
        self.record()?;
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(rx) = gate {
            return rx.await.map_err(|e| ApiError::Transport(e.to_string()));
        }
        Ok(self
            .disasters
            .iter()
            .filter(|d| filter.state.is_empty() || d.state == filter.state)
            .cloned()
            .collect())
    }

    async fn risk_assessments(
        &self,
        filter: &FilterState,
    ) -> Result<Vec<RiskAssessment>, ApiError> {
        self.record()?;
        self.risk_filters.borrow_mut().push(filter.clone());
        Ok(self
            .assessments
            .iter()
            .filter(|a| {
                filter.min_risk_level <= MIN_RISK_LEVEL_FLOOR
                    || a.risk_level.is_some_and(|l| l >= filter.min_risk_level)
            })
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Cleared(LayerKind),
    /// Marker titles, in order.
    Markers(Vec<String>),
    /// Zone radii, in order.
    Zones(Vec<f64>),
    Attached(LayerKind, bool),
    Loading(bool),
}

#[derive(Default)]
pub struct MockSurface {
    pub events: RefCell<Vec<SurfaceEvent>>,
}

impl MapSurface for MockSurface {
    fn clear_layer(&self, layer: LayerKind) {
        self.events.borrow_mut().push(SurfaceEvent::Cleared(layer));
    }

    fn add_markers(&self, markers: &[MarkerSpec]) {
        let titles = markers.iter().map(|m| m.title.clone()).collect();
        self.events.borrow_mut().push(SurfaceEvent::Markers(titles));
    }

    fn add_zones(&self, zones: &[ZoneSpec]) {
        let radii = zones.iter().map(|z| z.radius).collect();
        self.events.borrow_mut().push(SurfaceEvent::Zones(radii));
    }

    fn set_layer_attached(&self, layer: LayerKind, attached: bool) {
        self.events
            .borrow_mut()
            .push(SurfaceEvent::Attached(layer, attached));
    }

    fn set_loading(&self, loading: bool) {
        self.events.borrow_mut().push(SurfaceEvent::Loading(loading));
    }
}

#[derive(Default)]
pub struct MockCharts {
    pub rendered: RefCell<Vec<ChartSpec>>,
}

impl ChartSurface for MockCharts {
    fn render_chart(&self, spec: &ChartSpec) {
        self.rendered.borrow_mut().push(spec.clone());
    }
}

#[derive(Default)]
pub struct MockNotifier {
    pub alerts: RefCell<Vec<(String, AlertLevel)>>,
}

impl Notifier for MockNotifier {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        self.alerts.borrow_mut().push((message.to_string(), level));
    }
}
