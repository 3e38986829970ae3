//! Filter value object and its query-string encodings.
//!
//! A `FilterState` is built once per user action from the filter controls
//! and handed to both overlay refreshes, so a refresh never re-reads the
//! controls half way through.

use url::form_urlencoded;
use url::Url;

/// Endpoint paths on the dashboard backend.
pub const STATISTICS_PATH: &str = "/api/statistics";
pub const DISASTERS_PATH: &str = "/api/disasters";
pub const RISK_ASSESSMENTS_PATH: &str = "/api/risk_assessments";

/// Lowest risk level; a minimum at or below this filters nothing.
pub const MIN_RISK_LEVEL_FLOOR: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Disaster type option value, empty for "all".
    pub disaster_type: String,
    /// State option value, empty for "all".
    pub state: String,
    pub active_only: bool,
    pub min_risk_level: i32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            disaster_type: String::new(),
            state: String::new(),
            active_only: false,
            min_risk_level: MIN_RISK_LEVEL_FLOOR,
        }
    }
}

impl FilterState {
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_disaster_type(mut self, disaster_type: impl Into<String>) -> Self {
        self.disaster_type = disaster_type.into();
        self
    }

    pub fn with_active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    pub fn with_min_risk_level(mut self, level: i32) -> Self {
        self.min_risk_level = level;
        self
    }

    fn append_common(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        if !self.disaster_type.is_empty() {
            query.append_pair("disaster_type", &self.disaster_type);
        }
        if !self.state.is_empty() {
            query.append_pair("state", &self.state);
        }
    }

    /// Query string for `/api/disasters` (no leading `?`).
    pub fn disasters_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.append_common(&mut query);
        if self.active_only {
            query.append_pair("active_only", "true");
        }
        query.finish()
    }

    /// Query string for `/api/risk_assessments` (no leading `?`).
    pub fn risk_assessments_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.append_common(&mut query);
        if self.min_risk_level > MIN_RISK_LEVEL_FLOOR {
            query.append_pair("min_risk_level", &self.min_risk_level.to_string());
        }
        query.finish()
    }

    pub fn disasters_path(&self) -> String {
        with_query(DISASTERS_PATH, &self.disasters_query())
    }

    pub fn risk_assessments_path(&self) -> String {
        with_query(RISK_ASSESSMENTS_PATH, &self.risk_assessments_query())
    }
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Rewrite `current` so its query carries the alert filter.
///
/// Other query parameters on the page survive; the three filter keys are
/// always written, empty when unset.
pub fn alert_filter_url(current: &str, filter: &FilterState) -> Result<String, url::ParseError> {
    const KEYS: [&str; 3] = ["disaster_type", "state", "active_only"];
    let mut url = Url::parse(current)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !KEYS.contains(&k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        pairs.append_pair("disaster_type", &filter.disaster_type);
        pairs.append_pair("state", &filter.state);
        pairs.append_pair("active_only", if filter.active_only { "true" } else { "false" });
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_has_empty_queries() {
        let filter = FilterState::default();
        assert_eq!(filter.disasters_path(), "/api/disasters");
        assert_eq!(filter.risk_assessments_path(), "/api/risk_assessments");
    }

    #[test]
    fn disasters_query_includes_set_fields() {
        let filter = FilterState::default()
            .with_disaster_type("1")
            .with_state("12")
            .with_active_only(true)
            .with_min_risk_level(4);
        assert_eq!(filter.disasters_query(), "disaster_type=1&state=12&active_only=true");
    }

    #[test]
    fn risk_query_skips_floor_level() {
        let filter = FilterState::default().with_state("Negeri Sembilan");
        assert_eq!(filter.risk_assessments_query(), "state=Negeri+Sembilan");
        let filter = filter.with_min_risk_level(3).with_active_only(true);
        assert_eq!(
            filter.risk_assessments_query(),
            "state=Negeri+Sembilan&min_risk_level=3"
        );
    }

    #[test]
    fn alert_filter_url_replaces_filter_keys() {
        let filter = FilterState::default().with_disaster_type("2").with_active_only(true);
        let url = alert_filter_url(
            "https://example.org/alerts?state=9&page=2&active_only=false",
            &filter,
        )
        .unwrap();
        assert_eq!(
            url,
            "https://example.org/alerts?page=2&disaster_type=2&state=&active_only=true"
        );
    }

    #[test]
    fn alert_filter_url_rejects_relative_input() {
        assert!(alert_filter_url("/alerts", &FilterState::default()).is_err());
    }
}
