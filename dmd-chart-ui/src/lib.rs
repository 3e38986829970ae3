//! Shared Dioxus components and browser services for the dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js, Leaflet and Bootstrap glue via `js_sys::eval()`
//! - `api`: `HazardApi` over the browser's `fetch`
//! - `chrome`: the shared UI chrome service (alerts, theme, reload, navigation)
//! - `surfaces`: `ChartSurface` / `MapSurface` backed by the bridge
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filters, toggles, containers, etc.)

pub mod api;
pub mod chrome;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod surfaces;
