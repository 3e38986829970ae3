//! Data-refresh pipeline for the dashboard views.
//!
//! The browser is reached only through the traits in this crate:
//! - [`HazardApi`]: the backend endpoints
//! - [`MapSurface`] / [`ChartSurface`]: Leaflet and Chart.js
//! - [`Notifier`]: the alert banner service
//!
//! The controllers own the pipeline state and never touch the DOM, so the
//! whole refresh contract runs under plain `cargo test`.

pub mod api;
pub mod layer;
pub mod map;
pub mod notify;
pub mod statistics;

#[cfg(test)]
mod testing;

pub use api::HazardApi;
pub use layer::{LayerKind, LayerState, OverlayLayer, Ticket};
pub use map::{MapController, MapSurface};
pub use notify::{AlertLevel, Notifier};
pub use statistics::{ChartSurface, StatisticsController};
