//! Headline counters from the statistics summary.

use dioxus::prelude::*;
use dmd_core::statistics::StatisticsSummary;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: StatisticsSummary,
}

/// One card per total the backend supplied; nothing when it sent none.
#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let cards: Vec<(&'static str, &'static str, u64)> = [
        ("Total Disasters", "primary", props.summary.total_disasters),
        ("Active Disasters", "danger", props.summary.active_disasters),
        ("Active Alerts", "warning", props.summary.active_alerts),
    ]
    .into_iter()
    .filter_map(|(label, tone, value)| value.map(|v| (label, tone, v)))
    .collect();

    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "row g-3 mb-4",
            for (label, tone, value) in cards {
                div {
                    key: "{label}",
                    class: "col-md-4",
                    div {
                        class: "card border-{tone}",
                        div {
                            class: "card-body",
                            h6 { class: "card-subtitle text-muted", "{label}" }
                            p { class: "display-6 mb-0 text-{tone}", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
