//! Aggregate counters served by `GET /api/statistics`.
//!
//! Each counter is a JSON object mapping a category label to a count. The
//! order the backend writes the keys in is the order the charts show them,
//! so [`CategoryCounts`] keeps entries in wire order instead of collecting
//! them into a sorted map.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered label -> count mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(Vec<(String, u64)>);

impl CategoryCounts {
    pub fn entries(&self) -> &[(String, u64)] {
        &self.0
    }

    /// Count for `label`, if present.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(l, v)| (l.into(), v)).collect())
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

struct CategoryCountsVisitor;

impl<'de> Visitor<'de> for CategoryCountsVisitor {
    type Value = CategoryCounts;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping labels to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, count)) = access.next_entry::<String, u64>()? {
            entries.push((label, count));
        }
        Ok(CategoryCounts(entries))
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryCountsVisitor)
    }
}

/// The four chart counters plus optional headline totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    #[serde(default)]
    pub disasters_by_type: CategoryCounts,
    #[serde(default)]
    pub disasters_by_state: CategoryCounts,
    #[serde(default)]
    pub disasters_by_month: CategoryCounts,
    #[serde(default)]
    pub risk_levels: CategoryCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_disasters: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_disasters: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_alerts: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_wire_order() {
        let json = r#"{"Tsunami":1,"Flood":9,"Earthquake":4}"#;
        let counts: CategoryCounts = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = counts.entries().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Tsunami", "Flood", "Earthquake"]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("Flood"), Some(9));
        assert_eq!(counts.get("Haze"), None);
    }

    #[test]
    fn summary_without_totals() {
        let json = r#"{
            "disasters_by_type": {"Flood": 3, "Earthquake": 1},
            "disasters_by_state": {},
            "disasters_by_month": {"Mar": 2},
            "risk_levels": {"1": 5}
        }"#;
        let summary: StatisticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.disasters_by_type.len(), 2);
        assert!(summary.disasters_by_state.is_empty());
        assert_eq!(summary.total_disasters, None);
    }

    #[test]
    fn summary_with_totals() {
        let json = r#"{
            "disasters_by_type": {}, "disasters_by_state": {},
            "disasters_by_month": {}, "risk_levels": {},
            "total_disasters": 40, "active_disasters": 6, "active_alerts": 2
        }"#;
        let summary: StatisticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_disasters, Some(40));
        assert_eq!(summary.active_alerts, Some(2));
    }

    #[test]
    fn rejects_non_numeric_counts() {
        let json = r#"{"Flood":"many"}"#;
        assert!(serde_json::from_str::<CategoryCounts>(json).is_err());
    }
}
