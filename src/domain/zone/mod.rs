//! Zone domain: supply/demand price levels detected by the backend.
//!
//! Zones are read-only on the client: they are only re-sorted and formatted.

mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Supply (resistance) or demand (support).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneType {
    Supply,
    Demand,
}

impl ZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supply => "Supply",
            Self::Demand => "Demand",
        }
    }

    /// Style class used to color the type label.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Supply => "supply-color",
            Self::Demand => "demand-color",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evidence attached to a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub level: f64,
    /// Confidence in `[0, 100]`.
    pub strength: f64,
    #[serde(default)]
    pub consolidation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
}

impl ZoneInfo {
    pub fn method_label(&self) -> &'static str {
        if self.consolidation {
            "Consolidation"
        } else {
            "Price Action"
        }
    }
}

/// A detected zone: when, which side, and its evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Backend timestamp, kept verbatim; formatted only for display.
    pub timestamp: String,
    pub zone_type: ZoneType,
    pub info: ZoneInfo,
}

/// Sort a copy of `zones` by strength, strongest first.
pub fn by_strength_desc(zones: &[Zone]) -> Vec<Zone> {
    let mut sorted = zones.to_vec();
    sorted.sort_by(|a, b| b.info.strength.total_cmp(&a.info.strength));
    sorted
}
