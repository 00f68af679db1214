//! Settings domain: the immutable per-request snapshot of analysis and display options.

use crate::shared::{DetectionMethod, ZoneDisplay};
use serde::{Deserialize, Serialize};

/// One snapshot of every user-configurable option.
///
/// Built fresh for every request and never persisted. `threshold_pct` is kept as
/// the percentage the user entered; conversion to a fraction happens only when
/// the request body is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // Zone detection
    pub threshold_pct: f64,
    pub detection_method: DetectionMethod,
    pub consol_window: u32,
    pub require_volume: bool,
    pub merge_zones: bool,

    // Display
    pub show_supply: bool,
    pub show_demand: bool,
    pub zone_display: ZoneDisplay,
    pub max_bars: u32,

    // Indicators
    pub show_sma20: bool,
    pub show_sma50: bool,
    pub show_sma200: bool,
    pub show_rsi: bool,
    pub rsi_period: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold_pct: 2.0,
            detection_method: DetectionMethod::Both,
            consol_window: 10,
            require_volume: true,
            merge_zones: true,
            show_supply: true,
            show_demand: true,
            zone_display: ZoneDisplay::Both,
            max_bars: 120,
            show_sma20: true,
            show_sma50: true,
            show_sma200: false,
            show_rsi: true,
            rsi_period: 14,
        }
    }
}

impl Settings {
    /// The threshold as the fraction the backend expects (`2.0` → `0.02`).
    pub fn threshold_fraction(&self) -> f64 {
        self.threshold_pct / 100.0
    }

    /// Slider echo text, e.g. `"2.5%"`.
    pub fn threshold_label(&self) -> String {
        format!("{}%", self.threshold_pct)
    }
}
