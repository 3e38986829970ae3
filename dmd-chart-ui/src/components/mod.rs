//! Reusable Dioxus RSX components for the dashboard apps.

mod alert_filter_form;
mod alert_placeholder;
mod chart_container;
mod chart_header;
mod dashboard_header;
mod layer_toggles;
mod loading_spinner;
mod map_filters;
mod refresh_button;
mod summary_cards;
mod theme_toggle;

pub use alert_filter_form::AlertFilterForm;
pub use alert_placeholder::AlertPlaceholder;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dashboard_header::DashboardHeader;
pub use layer_toggles::LayerToggles;
pub use loading_spinner::LoadingSpinner;
pub use map_filters::MapFilters;
pub use refresh_button::RefreshButton;
pub use summary_cards::SummaryCards;
pub use theme_toggle::ThemeToggle;
