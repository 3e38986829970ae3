//! `HazardApi` over reqwest, for use outside the browser.

use std::time::Duration;

use dmd_core::config::DashboardConfig;
use dmd_core::disaster::Disaster;
use dmd_core::filter::STATISTICS_PATH;
use dmd_core::risk_assessment::RiskAssessment;
use dmd_core::statistics::StatisticsSummary;
use dmd_core::{ApiError, FilterState};
use dmd_pipeline::HazardApi;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestApi {
    client: Client,
    config: DashboardConfig,
}

impl ReqwestApi {
    pub fn new(config: DashboardConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl HazardApi for ReqwestApi {
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
