//! Shared newtypes and enums used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the backend expects, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Ticker ──────────────────────────────────────────────────────────────────

/// A normalized ticker symbol (trimmed, upper-cased), e.g. `"AAPL"`.
///
/// Construction never fails; an empty ticker is representable so that the
/// orchestrator can reject it with a validation error before any request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize raw user input.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl Serialize for Ticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ticker::normalize(&s))
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Candle interval requested from the market data provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "60m")]
    Minute60,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
}

impl Interval {
    pub const ALL: [Interval; 6] = [
        Self::Minute5,
        Self::Minute15,
        Self::Minute30,
        Self::Minute60,
        Self::Day1,
        Self::Week1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Minute60 => "60m",
            Self::Day1 => "1d",
            Self::Week1 => "1wk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Minute5 => "5 Minutes",
            Self::Minute15 => "15 Minutes",
            Self::Minute30 => "30 Minutes",
            Self::Minute60 => "60 Minutes",
            Self::Day1 => "Daily",
            Self::Week1 => "Weekly",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| format!("Unknown interval: {}", s))
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Lookback period of history requested from the market data provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "60d")]
    Days60,
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "120d")]
    Days120,
    #[serde(rename = "180d")]
    Days180,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "2y")]
    Year2,
    #[serde(rename = "5y")]
    Year5,
    #[serde(rename = "10y")]
    Year10,
}

impl Period {
    pub const ALL: [Period; 8] = [
        Self::Days60,
        Self::Days90,
        Self::Days120,
        Self::Days180,
        Self::Year1,
        Self::Year2,
        Self::Year5,
        Self::Year10,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days60 => "60d",
            Self::Days90 => "90d",
            Self::Days120 => "120d",
            Self::Days180 => "180d",
            Self::Year1 => "1y",
            Self::Year2 => "2y",
            Self::Year5 => "5y",
            Self::Year10 => "10y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Days60 => "60 Days",
            Self::Days90 => "90 Days",
            Self::Days120 => "120 Days",
            Self::Days180 => "180 Days",
            Self::Year1 => "1 Year",
            Self::Year2 => "2 Years",
            Self::Year5 => "5 Years",
            Self::Year10 => "10 Years",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown period: {}", s))
    }
}

// ─── DetectionMethod ─────────────────────────────────────────────────────────

/// Which backend zone detector to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    #[default]
    Both,
    Consolidation,
    #[serde(rename = "Price Action")]
    PriceAction,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "Both",
            Self::Consolidation => "Consolidation",
            Self::PriceAction => "Price Action",
        }
    }
}

impl FromStr for DetectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Both" => Ok(Self::Both),
            "Consolidation" => Ok(Self::Consolidation),
            "Price Action" => Ok(Self::PriceAction),
            other => Err(format!("Unknown detection method: {}", other)),
        }
    }
}

// ─── ZoneDisplay ─────────────────────────────────────────────────────────────

/// How the backend draws zones on the chart itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneDisplay {
    #[default]
    Both,
    #[serde(rename = "Filled Rectangles")]
    FilledRectangles,
    #[serde(rename = "Horizontal Lines")]
    HorizontalLines,
}

impl ZoneDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "Both",
            Self::FilledRectangles => "Filled Rectangles",
            Self::HorizontalLines => "Horizontal Lines",
        }
    }
}

impl FromStr for ZoneDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Both" => Ok(Self::Both),
            "Filled Rectangles" => Ok(Self::FilledRectangles),
            "Horizontal Lines" => Ok(Self::HorizontalLines),
            other => Err(format!("Unknown zone display: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_normalizes_case_and_whitespace() {
        assert_eq!(Ticker::normalize("aapl ").as_str(), "AAPL");
        assert_eq!(Ticker::normalize("  msft\t").as_str(), "MSFT");
        assert!(Ticker::normalize("   ").is_empty());
    }

    #[test]
    fn test_ticker_serializes_as_plain_string() {
        let json = serde_json::to_string(&Ticker::from("spy")).unwrap();
        assert_eq!(json, "\"SPY\"");
    }

    #[test]
    fn test_interval_wire_codes() {
        assert_eq!(serde_json::to_string(&Interval::Week1).unwrap(), "\"1wk\"");
        assert_eq!("60m".parse::<Interval>().unwrap(), Interval::Minute60);
        assert!("2h".parse::<Interval>().is_err());
    }

    #[test]
    fn test_period_wire_codes() {
        assert_eq!(serde_json::to_string(&Period::Year10).unwrap(), "\"10y\"");
        assert_eq!("180d".parse::<Period>().unwrap(), Period::Days180);
        assert_eq!(Period::default().label(), "60 Days");
    }

    #[test]
    fn test_detection_method_uses_display_names_on_wire() {
        assert_eq!(
            serde_json::to_string(&DetectionMethod::PriceAction).unwrap(),
            "\"Price Action\""
        );
        assert_eq!(
            "Consolidation".parse::<DetectionMethod>().unwrap(),
            DetectionMethod::Consolidation
        );
    }

    #[test]
    fn test_zone_display_round_names() {
        assert_eq!(
            serde_json::to_string(&ZoneDisplay::FilledRectangles).unwrap(),
            "\"Filled Rectangles\""
        );
        assert_eq!(
            "Horizontal Lines".parse::<ZoneDisplay>().unwrap(),
            ZoneDisplay::HorizontalLines
        );
    }
}
