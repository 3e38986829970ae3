use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::risk_level::RiskLevel;

/// A location's hazard assessment as served by `GET /api/risk_assessments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub location_name: Option<String>,
    pub state: String,
    pub disaster_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 1-5, 5 being highest risk. Other values, or none, are passed through unmapped.
    #[serde(default)]
    pub risk_level: Option<i32>,
    pub last_assessed: NaiveDate,
    #[serde(default)]
    pub details: Option<String>,
}

impl RiskAssessment {
    pub fn level(&self) -> Option<RiskLevel> {
        self.risk_level.and_then(RiskLevel::from_value)
    }

    /// Location label, empty when the backend sent none.
    pub fn location(&self) -> &str {
        self.location_name.as_deref().unwrap_or_default()
    }
}
