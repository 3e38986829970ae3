//! `HazardApi` over the browser's `fetch`.

use dmd_core::config::DashboardConfig;
use dmd_core::disaster::Disaster;
use dmd_core::filter::STATISTICS_PATH;
use dmd_core::risk_assessment::RiskAssessment;
use dmd_core::statistics::StatisticsSummary;
use dmd_core::{ApiError, FilterState};
use dmd_pipeline::HazardApi;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches JSON from the dashboard backend, same origin unless configured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserApi {
    config: DashboardConfig,
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

impl BrowserApi {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// GET `path` and decode the body. Non-2xx statuses are errors.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let url = self.config.url(path);
        log::debug!("GET {}", url);

        let resp_value = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl HazardApi for BrowserApi {
    async fn statistics(&self) -> Result<StatisticsSummary, ApiError> {
        self.get_json(STATISTICS_PATH).await
    }

    async fn disasters(&self, filter: &FilterState) -> Result<Vec<Disaster>, ApiError> {
        self.get_json(&filter.disasters_path()).await
    }

    async fn risk_assessments(
        &self,
        filter: &FilterState,
    ) -> Result<Vec<RiskAssessment>, ApiError> {
        self.get_json(&filter.risk_assessments_path()).await
    }
}
