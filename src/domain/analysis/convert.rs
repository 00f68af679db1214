//! Conversions between analysis domain types and wire types.

use super::wire::{AnalyzeRequestBody, AnalyzeResponse};
use super::{AnalysisRequest, AnalysisResult, ChartDocument, DataSource};
use crate::domain::zone::Zone;
use crate::error::ZoneError;

impl From<&AnalysisRequest> for AnalyzeRequestBody {
    fn from(req: &AnalysisRequest) -> Self {
        let s = &req.settings;
        let (ticker, interval, period) = match &req.source {
            DataSource::Ticker(q) => (Some(q.ticker.clone()), Some(q.interval), Some(q.period)),
            DataSource::Uploaded => (None, None, None),
        };

        Self {
            ticker,
            interval,
            period,
            threshold: s.threshold_fraction(),
            consol_window: s.consol_window,
            detection_method: s.detection_method,
            require_volume: s.require_volume,
            merge_zones: s.merge_zones,
            show_sma20: s.show_sma20,
            show_sma50: s.show_sma50,
            show_sma200: s.show_sma200,
            show_rsi: s.show_rsi,
            show_supply: s.show_supply,
            show_demand: s.show_demand,
            zone_display: s.zone_display,
            max_bars: s.max_bars,
            rsi_period: s.rsi_period,
            use_uploaded_data: req.source.is_uploaded(),
        }
    }
}

impl AnalysisResult {
    /// Decode a wire response. `uploaded` selects which label field is preferred.
    ///
    /// A chart document that is not valid JSON fails the whole result.
    pub fn from_wire(resp: AnalyzeResponse, uploaded: bool) -> Result<Self, ZoneError> {
        let chart = ChartDocument::parse(&resp.chart)?;

        let label = if uploaded {
            resp.title.or(resp.ticker).unwrap_or_else(|| "Uploaded Data".to_string())
        } else {
            resp.ticker.or(resp.title).unwrap_or_default()
        };
        let interval = resp.interval.unwrap_or_else(|| {
            if uploaded {
                "Custom".to_string()
            } else {
                String::new()
            }
        });

        Ok(Self {
            label,
            interval,
            chart,
            zones: resp.zones.into_iter().map(Zone::from).collect(),
            data_source: resp.data_source,
        })
    }
}
