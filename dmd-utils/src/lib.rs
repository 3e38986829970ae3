//! Shared utility functions for dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Month labels in calendar order, as the backend writes them.
    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate for display, e.g. "5 Mar 2024"
    pub fn format_display(date: &NaiveDate) -> String {
        format!(
            "{} {} {}",
            date.day(),
            MONTH_ABBREVIATIONS[date.month0() as usize],
            date.year()
        )
    }

    /// Display form of an optional date; a missing one reads "N/A".
    pub fn display_date(date: Option<&NaiveDate>) -> String {
        date.map(format_display).unwrap_or_else(|| "N/A".to_string())
    }

}
