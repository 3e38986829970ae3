//! Command implementations for the dashboard CLI.
//!
//! Each subcommand reads one backend endpoint through the same
//! `HazardApi` the dashboard apps use and prints it as a table or CSV.

use std::io;

use clap::{Args, Subcommand};
use dmd_core::config::DashboardConfig;
use dmd_core::filter::MIN_RISK_LEVEL_FLOOR;
use dmd_core::reference::{disaster_type_options, state_options, FilterOption};
use dmd_core::FilterState;
use dmd_pipeline::HazardApi;
use log::info;

pub mod client;
pub mod report;

use client::ReqwestApi;
use report::{OutputFormat, Report};

/// Filters shared by the list subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Disaster type, by name ("Flood") or backend id ("1")
    #[arg(short = 't', long)]
    pub disaster_type: Option<String>,

    /// State, by name ("Selangor") or backend id ("12")
    #[arg(short = 's', long)]
    pub state: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the statistics summary behind the charts
    Stats,

    /// List disasters
    Disasters {
        #[command(flatten)]
        filter: FilterArgs,

        /// Only include ongoing disasters
        #[arg(long)]
        active_only: bool,
    },

    /// List risk assessments with the zone radius drawn on the map
    RiskZones {
        #[command(flatten)]
        filter: FilterArgs,

        /// Lowest risk level to include (1-5)
        #[arg(short = 'm', long, default_value_t = MIN_RISK_LEVEL_FLOOR)]
        min_risk_level: i32,
    },
}

/// Map a name to its 1-based backend id; ids and unknown values pass through.
pub fn resolve_option(value: &str, options: &[FilterOption]) -> String {
    options
        .iter()
        .find(|opt| opt.label.eq_ignore_ascii_case(value.trim()))
        .map(|opt| opt.value.clone())
        .unwrap_or_else(|| value.trim().to_string())
}

impl FilterArgs {
    pub fn to_filter(&self) -> FilterState {
        let mut filter = FilterState::default();
        if let Some(t) = &self.disaster_type {
            filter = filter.with_disaster_type(resolve_option(t, &disaster_type_options()));
        }
        if let Some(s) = &self.state {
            filter = filter.with_state(resolve_option(s, &state_options()));
        }
        filter
    }
}

pub async fn run(command: Command, api_base: &str, format: OutputFormat) -> anyhow::Result<()> {
    let api = ReqwestApi::new(DashboardConfig::new(api_base))?;

    let report = match command {
        Command::Stats => {
            let summary = api.statistics().await?;
            Report::statistics(&summary)
        }
        Command::Disasters {
            filter,
            active_only,
        } => {
            let filter = filter.to_filter().with_active_only(active_only);
            let records = api.disasters(&filter).await?;
            info!("{} disasters for {:?}", records.len(), filter.disasters_query());
            Report::disasters(&records)
        }
        Command::RiskZones {
            filter,
            min_risk_level,
        } => {
            let filter = filter.to_filter().with_min_risk_level(min_risk_level);
            let records = api.risk_assessments(&filter).await?;
            info!(
                "{} risk assessments for {:?}",
                records.len(),
                filter.risk_assessments_query()
            );
            Report::risk_zones(&records)
        }
    };

    report.write(format, io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn names_resolve_to_backend_ids() {
        assert_eq!(resolve_option("Selangor", &state_options()), "12");
        assert_eq!(resolve_option("forest fire", &disaster_type_options()), "4");
        assert_eq!(resolve_option("7", &state_options()), "7");
    }

    #[test]
    fn parses_disaster_filters() {
        let cli = TestCli::try_parse_from([
            "dmd", "disasters", "--state", "Johor", "-t", "Flood", "--active-only",
        ])
        .unwrap();
        match cli.command {
            Command::Disasters {
                filter,
                active_only,
            } => {
                let filter = filter.to_filter().with_active_only(active_only);
                assert_eq!(
                    filter.disasters_query(),
                    "disaster_type=1&state=1&active_only=true"
                );
            }
            _ => panic!("expected disasters"),
        }
    }

    #[test]
    fn risk_zones_default_to_the_floor() {
        let cli = TestCli::try_parse_from(["dmd", "risk-zones"]).unwrap();
        match cli.command {
            Command::RiskZones { min_risk_level, .. } => {
                assert_eq!(min_risk_level, MIN_RISK_LEVEL_FLOOR)
            }
            _ => panic!("expected risk-zones"),
        }
    }
}
