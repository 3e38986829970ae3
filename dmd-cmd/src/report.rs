//! Tabular output for the CLI, as aligned text or CSV.

use std::io::Write;

use clap::ValueEnum;
use dmd_core::disaster::Disaster;
use dmd_core::risk_assessment::RiskAssessment;
use dmd_core::risk_level::description_for;
use dmd_core::statistics::StatisticsSummary;
use dmd_data::charts::{ChartSpec, StatisticsCharts};
use dmd_data::overlays::zone_radius_for;
use dmd_utils::dates::display_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

/// Header row plus string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    pub fn disasters(records: &[Disaster]) -> Self {
        let rows = records
            .iter()
            .map(|d| {
                vec![
                    d.id.map(|id| id.to_string()).unwrap_or_default(),
                    d.title.clone(),
                    d.disaster_type.clone(),
                    d.state.clone(),
                    display_date(Some(&d.start_date)),
                    display_date(d.end_date.as_ref()),
                    d.severity.map(|s| s.to_string()).unwrap_or_default(),
                    description_for(d.severity).unwrap_or_default().to_string(),
                    d.status_label().to_string(),
                ]
            })
            .collect();
        Self {
            headers: vec![
                "id", "title", "type", "state", "start", "end", "severity", "level", "status",
            ],
            rows,
        }
    }

    pub fn risk_zones(records: &[RiskAssessment]) -> Self {
        let rows = records
            .iter()
            .map(|a| {
                vec![
                    a.location().to_string(),
                    a.state.clone(),
                    a.disaster_type.clone(),
                    a.risk_level.map(|l| l.to_string()).unwrap_or_default(),
                    description_for(a.risk_level).unwrap_or_default().to_string(),
                    format!("{:.0}", zone_radius_for(a.risk_level)),
                    display_date(Some(&a.last_assessed)),
                ]
            })
            .collect();
        Self {
            headers: vec![
                "location", "state", "type", "risk_level", "level", "radius_m", "last_assessed",
            ],
            rows,
        }
    }

    /// Every series the statistics page charts, one row per point.
    ///
    /// Rows come out as charted: states cut to the top ten, months in
    /// calendar order with zeros filled in.
    pub fn statistics(summary: &StatisticsSummary) -> Self {
        let charts = StatisticsCharts::from_summary(summary);
        let named: [(&str, &ChartSpec); 4] = [
            ("type", &charts.by_type),
            ("state", &charts.by_state),
            ("month", &charts.by_month),
            ("risk_level", &charts.risk_levels),
        ];

        let mut rows = Vec::new();
        for (series, spec) in named {
            for (i, (label, value)) in spec.data.labels.iter().zip(&spec.data.values).enumerate() {
                let percent = spec
                    .data
                    .percentages
                    .as_ref()
                    .and_then(|p| p.get(i))
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                rows.push(vec![series.to_string(), label.clone(), value.to_string(), percent]);
            }
        }

        let totals = [
            ("total_disasters", summary.total_disasters),
            ("active_disasters", summary.active_disasters),
            ("active_alerts", summary.active_alerts),
        ];
        for (label, value) in totals {
            if let Some(value) = value {
                rows.push(vec![
                    "totals".to_string(),
                    label.to_string(),
                    value.to_string(),
                    String::new(),
                ]);
            }
        }

        Self {
            headers: vec!["series", "label", "count", "percent"],
            rows,
        }
    }

    pub fn write<W: Write>(&self, format: OutputFormat, out: W) -> anyhow::Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    fn write_csv<W: Write>(&self, out: W) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_table<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        write_aligned(&mut out, &headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_aligned(&mut out, &rule, &widths)?;
        for row in &self.rows {
            write_aligned(&mut out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_aligned<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> std::io::Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn flood() -> Disaster {
        Disaster {
            id: Some(3),
            title: "Kota Bharu flood".to_string(),
            disaster_type: "Flood".to_string(),
            state: "Kelantan".to_string(),
            latitude: Some(6.12),
            longitude: Some(102.24),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
            is_active: true,
            severity: Some(4),
            description: None,
        }
    }

    #[test]
    fn disaster_rows() {
        let report = Report::disasters(&[flood()]);
        assert_eq!(report.headers.len(), report.rows[0].len());
        assert_eq!(report.rows[0][4], "15 Jan 2024");
        assert_eq!(report.rows[0][5], "N/A");
        assert_eq!(report.rows[0][7], "High Risk");
        assert_eq!(report.rows[0][8], "Active");
    }

    #[test]
    fn ended_disaster_shows_its_end_date() {
        let mut record = flood();
        record.end_date = NaiveDate::from_ymd_opt(2024, 2, 3);
        record.is_active = false;
        let report = Report::disasters(&[record]);
        assert_eq!(report.rows[0][5], "3 Feb 2024");
        assert_eq!(report.rows[0][8], "Inactive");
    }

    #[test]
    fn risk_zone_rows_tolerate_missing_level_and_name() {
        let record = RiskAssessment {
            id: None,
            location_name: None,
            state: "Pahang".to_string(),
            disaster_type: "Flood".to_string(),
            latitude: 3.8,
            longitude: 103.3,
            risk_level: None,
            last_assessed: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            details: None,
        };
        let report = Report::risk_zones(&[record]);
        assert_eq!(
            report.rows[0],
            vec!["", "Pahang", "Flood", "", "", "5000", "5 Jan 2025"]
        );
    }

    #[test]
    fn out_of_range_severity_has_no_description() {
        let mut record = flood();
        record.severity = Some(9);
        let report = Report::disasters(&[record]);
        assert_eq!(report.rows[0][6], "9");
        assert_eq!(report.rows[0][7], "");
    }

    #[test]
    fn statistics_rows_follow_the_charts() {
        let summary: StatisticsSummary = serde_json::from_str(
            r#"{"disasters_by_type":{"Flood":3,"Earthquake":1},
                "disasters_by_state":{},
                "disasters_by_month":{"Mar":2},
                "risk_levels":{"1":5},
                "total_disasters":4}"#,
        )
        .unwrap();
        let report = Report::statistics(&summary);

        let series: Vec<&str> = report.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(series.iter().filter(|s| **s == "type").count(), 2);
        assert_eq!(series.iter().filter(|s| **s == "state").count(), 0);
        assert_eq!(series.iter().filter(|s| **s == "month").count(), 12);
        assert_eq!(series.iter().filter(|s| **s == "risk_level").count(), 1);

        assert_eq!(report.rows[0], vec!["type", "Flood", "3", "75"]);
        assert_eq!(report.rows[1], vec!["type", "Earthquake", "1", "25"]);
        assert!(report.rows.contains(&vec![
            "month".to_string(),
            "Mar".to_string(),
            "2".to_string(),
            String::new()
        ]));
        assert_eq!(
            report.rows.last().unwrap(),
            &vec!["totals", "total_disasters", "4", ""]
        );
    }

    #[test]
    fn table_output_is_aligned() {
        let report = Report {
            headers: vec!["state", "count"],
            rows: vec![
                vec!["Sabah".to_string(), "12".to_string()],
                vec!["Negeri Sembilan".to_string(), "3".to_string()],
            ],
        };
        let mut out = Vec::new();
        report.write(OutputFormat::Table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "state            count");
        assert_eq!(lines[1], "---------------  -----");
        assert_eq!(lines[2], "Sabah            12");
        assert_eq!(lines[3], "Negeri Sembilan  3");
    }

    #[test]
    fn csv_output_quotes_commas() {
        let report = Report {
            headers: vec!["title"],
            rows: vec![vec!["Flood, Kuantan".to_string()]],
        };
        let mut out = Vec::new();
        report.write(OutputFormat::Csv, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "title\n\"Flood, Kuantan\"\n");
    }
}
