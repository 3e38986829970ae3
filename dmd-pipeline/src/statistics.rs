//! Statistics page pipeline: one fetch, four charts.

use dmd_core::statistics::StatisticsSummary;
use dmd_core::ApiError;
use dmd_data::charts::{ChartSpec, StatisticsCharts};
use log::{error, info};

use crate::api::HazardApi;
use crate::notify::{AlertLevel, Notifier};

pub const STATISTICS_LOAD_ERROR: &str = "Failed to load chart data. Please refresh the page.";

/// Where charts get drawn.
///
/// Rendering is fire-and-forget: a chart whose canvas is not on the page
/// is skipped by the implementation without affecting the others.
pub trait ChartSurface {
    fn render_chart(&self, spec: &ChartSpec);
}

pub struct StatisticsController<A, C, N> {
    api: A,
    charts: C,
    notifier: N,
}

impl<A, C, N> StatisticsController<A, C, N>
where
    A: HazardApi,
    C: ChartSurface,
    N: Notifier,
{
    pub fn new(api: A, charts: C, notifier: N) -> Self {
        Self {
            api,
            charts,
            notifier,
        }
    }

    #[cfg(test)]
    pub(crate) fn charts(&self) -> &C {
        &self.charts
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the summary and render every chart.
    ///
    /// On failure nothing is rendered, one banner is shown, and the error
    /// is returned for the caller's own bookkeeping. There is no retry.
    pub async fn load(&self) -> Result<StatisticsSummary, ApiError> {
        match self.api.statistics().await {
            Ok(summary) => {
                let charts = StatisticsCharts::from_summary(&summary);
                for spec in charts.all() {
                    self.charts.render_chart(spec);
                }
                info!(
                    "statistics charts rendered ({} types, {} states)",
                    summary.disasters_by_type.len(),
                    summary.disasters_by_state.len()
                );
                Ok(summary)
            }
            Err(e) => {
                error!("Error initializing charts: {}", e);
                self.notifier
                    .show_alert(STATISTICS_LOAD_ERROR, AlertLevel::Danger);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockApi, MockCharts, MockNotifier};
    use dmd_data::charts::{MONTH_CHART_ID, RISK_CHART_ID, STATE_CHART_ID, TYPE_CHART_ID};

    #[tokio::test]
    async fn renders_all_four_charts() {
        let summary: StatisticsSummary = serde_json::from_str(
            r#"{"disasters_by_type":{"Flood":3,"Earthquake":1},
                "disasters_by_state":{},
                "disasters_by_month":{"Mar":2},
                "risk_levels":{"1":5}}"#,
        )
        .unwrap();
        let stats = StatisticsController::new(
            MockApi::with_statistics(summary.clone()),
            MockCharts::default(),
            MockNotifier::default(),
        );

        let loaded = stats.load().await.unwrap();
        assert_eq!(loaded, summary);

        let rendered = stats.charts().rendered.borrow();
        let canvases: Vec<&str> = rendered.iter().map(|s| s.canvas_id).collect();
        assert_eq!(
            canvases,
            vec![TYPE_CHART_ID, STATE_CHART_ID, MONTH_CHART_ID, RISK_CHART_ID]
        );
        assert_eq!(rendered[0].data.percentages, Some(vec![75, 25]));
        assert_eq!(rendered[1].data.len(), 0);
        assert_eq!(rendered[2].data.len(), 12);
        assert_eq!(rendered[3].data.len(), 1);
        assert!(stats.notifier().alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn failure_renders_nothing_and_alerts_once() {
        let api = MockApi::default();
        api.fail_with(ApiError::Status(503));
        let stats = StatisticsController::new(api, MockCharts::default(), MockNotifier::default());

        let result = stats.load().await;
        assert_eq!(result, Err(ApiError::Status(503)));
        assert!(stats.charts().rendered.borrow().is_empty());

        let alerts = stats.notifier().alerts.borrow();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0, STATISTICS_LOAD_ERROR);
        assert_eq!(alerts[0].1, AlertLevel::Danger);
    }
}
