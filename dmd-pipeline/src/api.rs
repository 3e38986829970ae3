use dmd_core::disaster::Disaster;
use dmd_core::risk_assessment::RiskAssessment;
use dmd_core::statistics::StatisticsSummary;
use dmd_core::{ApiError, FilterState};

/// The three backend endpoints the dashboard reads.
///
/// Implementations are single-threaded: the browser client holds JS values
/// and the futures are never sent across threads.
#[allow(async_fn_in_trait)]
pub trait HazardApi {
    /// `GET /api/statistics`
    async fn statistics(&self) -> Result<StatisticsSummary, ApiError>;

    /// `GET /api/disasters` scoped by `filter`
    async fn disasters(&self, filter: &FilterState) -> Result<Vec<Disaster>, ApiError>;

    /// `GET /api/risk_assessments` scoped by `filter`
    async fn risk_assessments(&self, filter: &FilterState)
        -> Result<Vec<RiskAssessment>, ApiError>;
}
