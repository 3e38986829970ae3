use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::risk_level::RiskLevel;

/// A disaster event as served by `GET /api/disasters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    /// Disaster type name, e.g. "Flood" or "Forest Fire".
    #[serde(rename = "type")]
    pub disaster_type: String,
    /// Administrative region (Malaysian state) name.
    pub state: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: bool,
    /// 1-5, 5 being most severe. Other values are passed through unmapped.
    #[serde(default)]
    pub severity: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Disaster {
    /// Both coordinates, if the record has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    pub fn severity_level(&self) -> Option<RiskLevel> {
        self.severity.and_then(RiskLevel::from_value)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOD_JSON: &str = r#"{
        "id": 7,
        "title": "Kelantan Monsoon Flood",
        "type": "Flood",
        "state": "Kelantan",
        "start_date": "2024-11-28",
        "end_date": null,
        "is_active": true,
        "severity": 4,
        "latitude": 5.3837,
        "longitude": 102.0292,
        "description": "Rivers above danger level"
    }"#;

    #[test]
    fn parses_backend_record() {
        let disaster: Disaster = serde_json::from_str(FLOOD_JSON).unwrap();
        assert_eq!(disaster.disaster_type, "Flood");
        assert_eq!(disaster.start_date, NaiveDate::from_ymd_opt(2024, 11, 28).unwrap());
        assert_eq!(disaster.coordinates(), Some((5.3837, 102.0292)));
        assert_eq!(disaster.severity_level(), Some(RiskLevel::High));
        assert_eq!(disaster.status_label(), "Active");
    }

    #[test]
    fn missing_coordinates_and_severity() {
        let json = r#"{"title":"Tremor","type":"Earthquake","state":"Sabah",
            "start_date":"2023-06-01","latitude":null,"severity":9}"#;
        let disaster: Disaster = serde_json::from_str(json).unwrap();
        assert_eq!(disaster.coordinates(), None);
        assert_eq!(disaster.severity_level(), None);
        assert!(!disaster.is_active);
    }
}
