//! Number formatting utilities for human-readable display.
//!
//! Rounding is half away from zero (the way browsers format `toFixed`), not
//! the round-half-to-even that `format!("{:.N}")` applies to exact ties.

/// Format `value` with exactly `decimals` fractional digits.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    // Avoid rendering "-0.00".
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.1$}", rounded, decimals)
}

/// Whole-number percentage, e.g. `67.2` → `"67%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", fixed(value, 0))
}

/// `volume / avg_volume` to one decimal with an `"x avg"` suffix.
///
/// Returns `None` when either side is missing or the average is zero; the
/// caller renders that as `"N/A"`. Zero volume is a real ratio (`"0.0x avg"`).
pub fn volume_ratio(volume: Option<f64>, avg_volume: Option<f64>) -> Option<String> {
    match (volume, avg_volume) {
        (Some(v), Some(avg)) if avg != 0.0 => {
            Some(format!("{}x avg", fixed(v / avg, 1)))
        }
        _ => None,
    }
}
