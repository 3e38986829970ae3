//! Data processing for the dashboard views.
//!
//! This crate turns API records into the shapes the browser libraries
//! consume: Chart.js configurations for the statistics charts, and marker,
//! zone and legend specs for the Leaflet map. Everything here is plain data
//! so it can be tested natively.

pub mod charts;
pub mod html;
pub mod overlays;
