use serde::{Deserialize, Serialize};

/// Five-step scale shared by disaster severity and risk assessment levels.
///
/// The backend sends plain integers. Anything outside 1..=5 has no visual
/// mapping: [`RiskLevel::from_value`] returns `None` and callers render the
/// record without a colour or description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    LifeThreatening,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::LifeThreatening,
    ];

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(RiskLevel::VeryLow),
            2 => Some(RiskLevel::Low),
            3 => Some(RiskLevel::Moderate),
            4 => Some(RiskLevel::High),
            5 => Some(RiskLevel::LifeThreatening),
            _ => None,
        }
    }

    pub fn value(self) -> i32 {
        match self {
            RiskLevel::VeryLow => 1,
            RiskLevel::Low => 2,
            RiskLevel::Moderate => 3,
            RiskLevel::High => 4,
            RiskLevel::LifeThreatening => 5,
        }
    }

    /// Hex colour used for markers, zones and legend swatches.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "#28a745",
            RiskLevel::Low => "#5cb85c",
            RiskLevel::Moderate => "#ffc107",
            RiskLevel::High => "#dc3545",
            RiskLevel::LifeThreatening => "#000000",
        }
    }

    /// Translucent fill used by the risk level chart segments.
    pub fn chart_fill(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "rgba(40, 167, 69, 0.7)",
            RiskLevel::Low => "rgba(92, 184, 92, 0.7)",
            RiskLevel::Moderate => "rgba(255, 193, 7, 0.7)",
            RiskLevel::High => "rgba(220, 53, 69, 0.7)",
            RiskLevel::LifeThreatening => "rgba(0, 0, 0, 0.7)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::LifeThreatening => "Life-Threatening",
        }
    }
}

/// Description for a raw severity/risk value, `None` when out of range.
pub fn description_for(value: Option<i32>) -> Option<&'static str> {
    value.and_then(RiskLevel::from_value).map(RiskLevel::description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_through_scale() {
        for level in RiskLevel::ALL {
            assert_eq!(RiskLevel::from_value(level.value()), Some(level));
        }
    }

    #[test]
    fn out_of_range_values_have_no_visual() {
        for value in [0, 6, -1, 42] {
            assert_eq!(RiskLevel::from_value(value), None);
            assert_eq!(description_for(Some(value)), None);
        }
        assert_eq!(description_for(None), None);
    }

    #[test]
    fn in_range_lookups() {
        assert_eq!(RiskLevel::VeryLow.color(), "#28a745");
        assert_eq!(description_for(Some(5)), Some("Life-Threatening"));
        assert_eq!(RiskLevel::High.chart_fill(), "rgba(220, 53, 69, 0.7)");
    }
}
