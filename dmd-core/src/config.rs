//! Fixed dashboard settings.
//!
//! Everything here is compiled in; the only runtime knob in the browser is
//! the API base, which defaults to the page's own origin.

/// Default map viewport: centred on Malaysia.
pub const DEFAULT_CENTER: (f64, f64) = (4.2105, 108.9758);
pub const DEFAULT_ZOOM: u8 = 6;
pub const MAX_ZOOM: u8 = 18;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Risk zone radius: `ZONE_BASE_RADIUS_M + level * ZONE_RADIUS_STEP_M` metres.
pub const ZONE_BASE_RADIUS_M: f64 = 5000.0;
pub const ZONE_RADIUS_STEP_M: f64 = 5000.0;
pub const ZONE_FILL_OPACITY: f64 = 0.2;
pub const ZONE_STROKE_WEIGHT: u32 = 1;

/// Alert banners close themselves after this long.
pub const ALERT_LIFETIME_MS: i32 = 5000;
/// Cosmetic delay before the refresh button reloads the page.
pub const REFRESH_DELAY_MS: i32 = 1000;

/// Browser storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

/// Where the apps send their API requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for API paths; empty means same origin.
    pub api_base: String,
}

impl DashboardConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Join the base with an API path such as `/api/statistics`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
