pub mod config;
pub mod disaster;
pub mod error;
pub mod filter;
pub mod reference;
pub mod risk_assessment;
pub mod risk_level;
pub mod statistics;
pub mod theme;

pub use error::ApiError;
pub use filter::FilterState;
pub use risk_level::RiskLevel;
pub use theme::Theme;
