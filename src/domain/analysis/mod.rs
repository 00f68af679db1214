//! Analysis domain: the analyze request, the chart document, and the decoded result.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::settings::Settings;
use crate::domain::zone::Zone;
use crate::error::ZoneError;
use crate::shared::{Interval, Period, Ticker};
use serde::{Deserialize, Serialize};

/// Remote-fetch parameters for API mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickerQuery {
    pub ticker: Ticker,
    pub interval: Interval,
    pub period: Period,
}

impl TickerQuery {
    /// Build from raw ticker input; the ticker is trimmed and upper-cased.
    pub fn new(raw_ticker: &str, interval: Interval, period: Period) -> Self {
        Self {
            ticker: Ticker::normalize(raw_ticker),
            interval,
            period,
        }
    }
}

/// Exactly one data source per request.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Ticker(TickerQuery),
    Uploaded,
}

impl DataSource {
    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded)
    }
}

/// Where the backend says the data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    Api,
    Upload,
}

/// A complete analysis request: settings snapshot plus data source.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub settings: Settings,
    pub source: DataSource,
}

impl AnalysisRequest {
    pub fn for_ticker(query: TickerQuery, settings: Settings) -> Self {
        Self {
            settings,
            source: DataSource::Ticker(query),
        }
    }

    pub fn for_upload(settings: Settings) -> Self {
        Self {
            settings,
            source: DataSource::Uploaded,
        }
    }

    /// Local checks that must pass before anything is sent.
    pub fn validate(&self) -> Result<(), ZoneError> {
        match &self.source {
            DataSource::Ticker(q) if q.ticker.is_empty() => {
                Err(ZoneError::validation("Please enter a ticker symbol"))
            }
            _ => Ok(()),
        }
    }
}

// ─── ChartDocument ───────────────────────────────────────────────────────────

/// The backend's chart document (`{data, layout}`), kept opaque.
///
/// The client never interprets its schema beyond reading the latest close of
/// the first trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDocument(serde_json::Value);

impl ChartDocument {
    /// Decode the string-encoded document the backend returns.
    pub fn parse(encoded: &str) -> Result<Self, ZoneError> {
        let value: serde_json::Value = serde_json::from_str(encoded)?;
        Ok(Self(value))
    }

    pub fn from_value(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Trace list (`data`), or `Null` if absent.
    pub fn data(&self) -> &serde_json::Value {
        self.0.get("data").unwrap_or(&serde_json::Value::Null)
    }

    /// Layout object, or `Null` if absent.
    pub fn layout(&self) -> &serde_json::Value {
        self.0.get("layout").unwrap_or(&serde_json::Value::Null)
    }

    /// Last `close` of the first trace, when the first trace is a price series.
    pub fn last_close(&self) -> Option<f64> {
        self.data()
            .get(0)?
            .get("close")?
            .as_array()?
            .last()?
            .as_f64()
            .filter(|p| p.is_finite() && *p != 0.0)
    }
}

// ─── AnalysisResult ──────────────────────────────────────────────────────────

/// A decoded, successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Ticker in API mode, uploaded file title in upload mode.
    pub label: String,
    pub interval: String,
    pub chart: ChartDocument,
    /// In backend order; presenters sort their own copy.
    pub zones: Vec<Zone>,
    pub data_source: Option<DataSourceKind>,
}

impl AnalysisResult {
    /// Chart heading, e.g. `"AAPL - 5m Timeframe"`.
    pub fn title(&self) -> String {
        format!("{} - {} Timeframe", self.label, self.interval)
    }
}
