//! Statistics chart datasets and their Chart.js configurations.
//!
//! Each of the four counters in a [`StatisticsSummary`] becomes one
//! [`ChartData`] (labels, values and, for the proportion charts, rounded
//! percentages) and from that one Chart.js config object. The JS side only
//! has to hand the config to `new Chart(...)`.

use dmd_core::risk_level::RiskLevel;
use dmd_core::statistics::{CategoryCounts, StatisticsSummary};
use dmd_utils::dates::MONTH_ABBREVIATIONS;
use serde::Serialize;
use serde_json::{json, Value};

/// Canvas ids the statistics page renders into.
pub const TYPE_CHART_ID: &str = "disasters-by-type-chart";
pub const STATE_CHART_ID: &str = "disasters-by-state-chart";
pub const MONTH_CHART_ID: &str = "disasters-by-month-chart";
pub const RISK_CHART_ID: &str = "risk-level-chart";

/// The state chart only shows this many states.
pub const TOP_STATES: usize = 10;

const TEXT_COLOR: &str = "#fff";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";

/// Fills for the type chart, in label order: blue, red, teal, orange.
const TYPE_FILLS: [&str; 4] = [
    "rgba(54, 162, 235, 0.7)",
    "rgba(255, 99, 132, 0.7)",
    "rgba(75, 192, 192, 0.7)",
    "rgba(255, 159, 64, 0.7)",
];

/// Labels, values and optional percentage labels for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentages: Option<Vec<u32>>,
}

impl ChartData {
    fn from_entries(entries: Vec<(String, u64)>) -> Self {
        let (labels, values) = entries.into_iter().unzip();
        Self {
            labels,
            values,
            percentages: None,
        }
    }

    fn with_percentages(mut self) -> Self {
        self.percentages = Some(percentages(&self.values));
        self
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A Chart.js configuration bound to the canvas it belongs on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub canvas_id: &'static str,
    pub data: ChartData,
    pub config: Value,
}

/// All four statistics charts.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsCharts {
    pub by_type: ChartSpec,
    pub by_state: ChartSpec,
    pub by_month: ChartSpec,
    pub risk_levels: ChartSpec,
}

impl StatisticsCharts {
    pub fn from_summary(summary: &StatisticsSummary) -> Self {
        Self {
            by_type: type_chart(&summary.disasters_by_type),
            by_state: state_chart(&summary.disasters_by_state),
            by_month: month_chart(&summary.disasters_by_month),
            risk_levels: risk_level_chart(&summary.risk_levels),
        }
    }

    pub fn all(&self) -> [&ChartSpec; 4] {
        [&self.by_type, &self.by_state, &self.by_month, &self.risk_levels]
    }
}

/// Share of the total for each value, rounded to the nearest percent.
///
/// An all-zero (or empty) input gives 0 for every entry.
pub fn percentages(values: &[u64]) -> Vec<u32> {
    let total: u64 = values.iter().sum();
    values
        .iter()
        .map(|&v| {
            if total == 0 {
                0
            } else {
                (v as f64 / total as f64 * 100.0).round() as u32
            }
        })
        .collect()
}

/// All twelve months in calendar order; months missing from `counts` are 0.
pub fn month_series(counts: &CategoryCounts) -> Vec<(String, u64)> {
    MONTH_ABBREVIATIONS
        .iter()
        .map(|month| (month.to_string(), counts.get(month).unwrap_or(0)))
        .collect()
}

/// The `n` largest entries by count, largest first. Ties keep wire order.
pub fn top_entries(counts: &CategoryCounts, n: usize) -> Vec<(String, u64)> {
    let mut entries = counts.entries().to_vec();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

fn opaque(fill: &str) -> String {
    fill.replace("0.7", "1")
}

fn title(text: &str) -> Value {
    json!({
        "display": true,
        "text": text,
        "color": TEXT_COLOR,
        "font": { "size": 16 }
    })
}

fn axis(begin_at_zero: bool, grid: bool) -> Value {
    let grid = if grid {
        json!({ "color": GRID_COLOR })
    } else {
        json!({ "display": false })
    };
    json!({
        "beginAtZero": begin_at_zero,
        "grid": grid,
        "ticks": { "color": TEXT_COLOR }
    })
}

/// Doughnut chart of disasters per type.
pub fn type_chart(counts: &CategoryCounts) -> ChartSpec {
    let data = ChartData::from_entries(counts.entries().to_vec()).with_percentages();
    let fills: Vec<&str> = (0..data.len())
        .map(|i| TYPE_FILLS[i % TYPE_FILLS.len()])
        .collect();
    let borders: Vec<String> = fills.iter().map(|f| opaque(f)).collect();

    let config = json!({
        "type": "doughnut",
        "data": {
            "labels": data.labels,
            "datasets": [{
                "data": data.values,
                "backgroundColor": fills,
                "borderColor": borders,
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "right", "labels": { "color": TEXT_COLOR } },
                "title": title("Disasters by Type")
            }
        },
        "percentLabels": data.percentages
    });

    ChartSpec {
        canvas_id: TYPE_CHART_ID,
        data,
        config,
    }
}

/// Horizontal bar chart of the top ten states.
pub fn state_chart(counts: &CategoryCounts) -> ChartSpec {
    let data = ChartData::from_entries(top_entries(counts, TOP_STATES));

    let config = json!({
        "type": "bar",
        "data": {
            "labels": data.labels,
            "datasets": [{
                "label": "Number of Disasters",
                "data": data.values,
                "backgroundColor": "rgba(54, 162, 235, 0.7)",
                "borderColor": "rgba(54, 162, 235, 1)",
                "borderWidth": 1
            }]
        },
        "options": {
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "title": title("Disasters by State (Top 10)")
            },
            "scales": {
                "x": axis(true, true),
                "y": axis(false, false)
            }
        }
    });

    ChartSpec {
        canvas_id: STATE_CHART_ID,
        data,
        config,
    }
}

/// Line chart over the twelve calendar months.
pub fn month_chart(counts: &CategoryCounts) -> ChartSpec {
    let data = ChartData::from_entries(month_series(counts));

    let config = json!({
        "type": "line",
        "data": {
            "labels": data.labels,
            "datasets": [{
                "label": "Number of Disasters",
                "data": data.values,
                "backgroundColor": "rgba(75, 192, 192, 0.2)",
                "borderColor": "rgba(75, 192, 192, 1)",
                "borderWidth": 2,
                "tension": 0.1,
                "fill": true
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "title": title("Disasters by Month (Current Year)")
            },
            "scales": {
                "x": axis(false, true),
                "y": axis(true, true)
            }
        }
    });

    ChartSpec {
        canvas_id: MONTH_CHART_ID,
        data,
        config,
    }
}

/// Level a risk chart label refers to, e.g. "Level 3" or "3".
fn level_from_label(label: &str) -> Option<RiskLevel> {
    label
        .rsplit(' ')
        .next()
        .and_then(|n| n.parse::<i32>().ok())
        .and_then(RiskLevel::from_value)
}

/// Polar area chart of risk assessments per level.
pub fn risk_level_chart(counts: &CategoryCounts) -> ChartSpec {
    let data = ChartData::from_entries(counts.entries().to_vec()).with_percentages();
    let fills: Vec<&str> = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            level_from_label(label)
                .unwrap_or(RiskLevel::ALL[i % RiskLevel::ALL.len()])
                .chart_fill()
        })
        .collect();
    let borders: Vec<String> = fills.iter().map(|f| opaque(f)).collect();

    let config = json!({
        "type": "polarArea",
        "data": {
            "labels": data.labels,
            "datasets": [{
                "data": data.values,
                "backgroundColor": fills,
                "borderColor": borders,
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "right", "labels": { "color": TEXT_COLOR } },
                "title": title("Risk Level Distribution")
            },
            "scales": {
                "r": {
                    "ticks": { "display": false },
                    "grid": { "color": GRID_COLOR },
                    "angleLines": { "color": GRID_COLOR }
                }
            }
        },
        "percentLabels": data.percentages
    });

    ChartSpec {
        canvas_id: RISK_CHART_ID,
        data,
        config,
    }
}
