//! Leaflet overlay specs for the disaster map.
//!
//! Markers and zones are built here as serializable structs; the JS bridge
//! turns each one into an `L.marker` / `L.circle` with its popup bound.

use dmd_core::config::{
    DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, TILE_ATTRIBUTION, TILE_URL, ZONE_BASE_RADIUS_M,
    ZONE_FILL_OPACITY, ZONE_RADIUS_STEP_M, ZONE_STROKE_WEIGHT,
};
use dmd_core::disaster::Disaster;
use dmd_core::reference::{icon_for, DISASTER_TYPES};
use dmd_core::risk_assessment::RiskAssessment;
use dmd_core::risk_level::{self, RiskLevel};
use dmd_utils::dates::format_date;
use serde::Serialize;

use crate::html::escape;

/// One disaster marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    /// Feather icon name.
    pub icon: &'static str,
    /// `None` when the severity is outside 1..=5.
    pub color: Option<&'static str>,
    pub popup_html: String,
}

/// One risk zone circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSpec {
    pub lat: f64,
    pub lng: f64,
    /// Metres.
    pub radius: f64,
    /// `None` when the risk level is outside 1..=5.
    pub color: Option<&'static str>,
    pub fill_opacity: f64,
    pub weight: u32,
    pub popup_html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    /// Swatch colour for risk rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    /// Feather icon for disaster type rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSpec {
    pub risk_levels: Vec<LegendEntry>,
    pub disaster_types: Vec<LegendEntry>,
}

/// Everything the bridge needs to create the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub center: [f64; 2],
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub legend: LegendSpec,
}

impl Default for MapSpec {
    fn default() -> Self {
        Self {
            center: [DEFAULT_CENTER.0, DEFAULT_CENTER.1],
            zoom: DEFAULT_ZOOM,
            max_zoom: MAX_ZOOM,
            tile_url: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            legend: legend(),
        }
    }
}

pub fn legend() -> LegendSpec {
    LegendSpec {
        risk_levels: RiskLevel::ALL
            .iter()
            .map(|level| LegendEntry {
                label: level.description(),
                color: Some(level.color()),
                icon: None,
            })
            .collect(),
        disaster_types: DISASTER_TYPES
            .iter()
            .map(|&(name, icon)| LegendEntry {
                label: name,
                color: None,
                icon: Some(icon),
            })
            .collect(),
    }
}

/// Zone radius in metres; grows with the raw risk level.
pub fn zone_radius(risk_level: i32) -> f64 {
    ZONE_BASE_RADIUS_M + risk_level as f64 * ZONE_RADIUS_STEP_M
}

/// Radius for a possibly missing level; no level draws the base circle.
pub fn zone_radius_for(risk_level: Option<i32>) -> f64 {
    risk_level.map_or(ZONE_BASE_RADIUS_M, zone_radius)
}

fn risk_badge(value: Option<i32>) -> String {
    let class = value.map(|v| v.to_string()).unwrap_or_default();
    let text = risk_level::description_for(value).unwrap_or("");
    format!(r#"<span class="badge risk-{}">{}</span>"#, class, text)
}

fn popup_row(label: &str, value: &str) -> String {
    format!(r#"<p class="mb-1"><strong>{}:</strong> {}</p>"#, label, value)
}

fn popup_note(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.is_empty() => format!(r#"<p class="mt-2">{}</p>"#, escape(t)),
        _ => String::new(),
    }
}

pub fn disaster_popup(disaster: &Disaster) -> String {
    format!(
        r#"<div class="disaster-popup"><h5>{}</h5>{}{}{}{}{}{}</div>"#,
        escape(&disaster.title),
        popup_row("Type", &escape(&disaster.disaster_type)),
        popup_row("Location", &escape(&disaster.state)),
        popup_row("Start Date", &format_date(&disaster.start_date)),
        popup_row("Status", disaster.status_label()),
        popup_row("Severity", &risk_badge(disaster.severity)),
        popup_note(disaster.description.as_deref()),
    )
}

pub fn risk_popup(assessment: &RiskAssessment) -> String {
    format!(
        r#"<div class="risk-popup"><h5>{}</h5>{}{}{}{}{}</div>"#,
        escape(assessment.location()),
        popup_row("State", &escape(&assessment.state)),
        popup_row("Disaster Type", &escape(&assessment.disaster_type)),
        popup_row("Risk Level", &risk_badge(assessment.risk_level)),
        popup_row("Last Assessed", &format_date(&assessment.last_assessed)),
        popup_note(assessment.details.as_deref()),
    )
}

/// Marker for a disaster, or `None` if the record has no coordinates.
pub fn marker_for(disaster: &Disaster) -> Option<MarkerSpec> {
    let (lat, lng) = disaster.coordinates()?;
    Some(MarkerSpec {
        lat,
        lng,
        title: disaster.title.clone(),
        icon: icon_for(&disaster.disaster_type),
        color: disaster.severity_level().map(RiskLevel::color),
        popup_html: disaster_popup(disaster),
    })
}

pub fn zone_for(assessment: &RiskAssessment) -> ZoneSpec {
    ZoneSpec {
        lat: assessment.latitude,
        lng: assessment.longitude,
        radius: zone_radius_for(assessment.risk_level),
        color: assessment.level().map(RiskLevel::color),
        fill_opacity: ZONE_FILL_OPACITY,
        weight: ZONE_STROKE_WEIGHT,
        popup_html: risk_popup(assessment),
    }
}

/// Markers for every disaster that can be placed; the rest are logged and skipped.
pub fn markers(disasters: &[Disaster]) -> Vec<MarkerSpec> {
    let markers: Vec<MarkerSpec> = disasters.iter().filter_map(marker_for).collect();
    let skipped = disasters.len() - markers.len();
    if skipped > 0 {
        log::warn!("{} disaster(s) without coordinates were not placed", skipped);
    }
    markers
}

pub fn zones(assessments: &[RiskAssessment]) -> Vec<ZoneSpec> {
    assessments.iter().map(zone_for).collect()
}
