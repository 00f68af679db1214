//! Settings aggregation: raw control values in, one [`Settings`] snapshot out.
//!
//! Coercion only: every field has a default, and anything that does not coerce
//! falls back to it. Semantic checks (plausible thresholds and so on) are the
//! backend's job.

use crate::domain::settings::Settings;
use std::str::FromStr;

/// Raw values as read from the page's controls.
///
/// Text and select inputs arrive as strings, checkboxes as booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub threshold: String,
    pub detection_method: String,
    pub consol_window: String,
    pub require_volume: bool,
    pub merge_zones: bool,
    pub show_supply: bool,
    pub show_demand: bool,
    pub zone_display: String,
    pub max_bars: String,
    pub show_sma20: bool,
    pub show_sma50: bool,
    pub show_sma200: bool,
    pub show_rsi: bool,
    pub rsi_period: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SettingsForm {
    fn from(s: &Settings) -> Self {
        Self {
            threshold: s.threshold_pct.to_string(),
            detection_method: s.detection_method.as_str().to_string(),
            consol_window: s.consol_window.to_string(),
            require_volume: s.require_volume,
            merge_zones: s.merge_zones,
            show_supply: s.show_supply,
            show_demand: s.show_demand,
            zone_display: s.zone_display.as_str().to_string(),
            max_bars: s.max_bars.to_string(),
            show_sma20: s.show_sma20,
            show_sma50: s.show_sma50,
            show_sma200: s.show_sma200,
            show_rsi: s.show_rsi,
            rsi_period: s.rsi_period.to_string(),
        }
    }
}

impl SettingsForm {
    /// Build the snapshot. Pure and infallible.
    pub fn collect(&self) -> Settings {
        let d = Settings::default();
        Settings {
            threshold_pct: leading_float(&self.threshold).unwrap_or(d.threshold_pct),
            detection_method: parse_or(&self.detection_method, d.detection_method),
            consol_window: leading_uint(&self.consol_window).unwrap_or(d.consol_window),
            require_volume: self.require_volume,
            merge_zones: self.merge_zones,
            show_supply: self.show_supply,
            show_demand: self.show_demand,
            zone_display: parse_or(&self.zone_display, d.zone_display),
            max_bars: leading_uint(&self.max_bars).unwrap_or(d.max_bars),
            show_sma20: self.show_sma20,
            show_sma50: self.show_sma50,
            show_sma200: self.show_sma200,
            show_rsi: self.show_rsi,
            rsi_period: leading_uint(&self.rsi_period).unwrap_or(d.rsi_period),
        }
    }
}

fn parse_or<T: FromStr>(raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or(default)
}

/// Longest numeric prefix as a float (`"2.5%"` → `2.5`).
///
/// Exponents are not read (`"1e1"` → `1.0`). Slider and select values never
/// carry one.
fn leading_float(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    (1..=end)
        .rev()
        .filter(|n| raw.is_char_boundary(*n))
        .find_map(|n| raw[..n].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Leading digits as an unsigned integer (`"14 bars"` → `14`). Negative input
/// does not coerce, and neither does anything past `u32::MAX`; the caller then
/// falls back to the default.
fn leading_uint(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
