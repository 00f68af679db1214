//! Wire types for `POST /api/analyze`.

use super::DataSourceKind;
use crate::domain::zone::wire::WireZone;
use crate::shared::{DetectionMethod, Interval, Period, Ticker, ZoneDisplay};
use serde::{Deserialize, Serialize};

/// JSON request body. `threshold` is a fraction, not a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<Ticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    pub threshold: f64,
    pub consol_window: u32,
    pub detection_method: DetectionMethod,
    pub require_volume: bool,
    pub merge_zones: bool,
    pub show_sma20: bool,
    pub show_sma50: bool,
    pub show_sma200: bool,
    pub show_rsi: bool,
    pub show_supply: bool,
    pub show_demand: bool,
    pub zone_display: ZoneDisplay,
    pub max_bars: u32,
    pub rsi_period: u32,
    pub use_uploaded_data: bool,
}

/// Successful analyze response.
///
/// The backend sends `ticker` in both modes (holding the file title in upload
/// mode); some deployments send `title` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    /// String-encoded chart document.
    pub chart: String,
    #[serde(default)]
    pub zones: Vec<WireZone>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub data_source: Option<DataSourceKind>,
}
