//! Analysis sub-client: runs an analysis on the backend.

use crate::client::ZoneClient;
use crate::domain::analysis::wire::AnalyzeRequestBody;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::error::ZoneError;

pub struct Analysis<'a> {
    pub(crate) client: &'a ZoneClient,
}

impl<'a> Analysis<'a> {
    /// Validate, send and decode one analysis.
    ///
    /// Local validation failures return before any request is made.
    pub async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ZoneError> {
        request.validate()?;

        let uploaded = request.source.is_uploaded();
        let fallback = if uploaded {
            "Failed to analyze data"
        } else {
            "Failed to analyze stock"
        };

        let body = AnalyzeRequestBody::from(request);
        tracing::debug!(
            ticker = ?body.ticker,
            use_uploaded_data = body.use_uploaded_data,
            threshold = body.threshold,
            "Sending analysis request"
        );

        let resp = self
            .client
            .http
            .analyze(&body)
            .await
            .map_err(|e| ZoneError::from_http(e, fallback))?;

        let result = AnalysisResult::from_wire(resp, uploaded)?;
        tracing::info!(label = %result.label, zones = result.zones.len(), "Analysis complete");
        Ok(result)
    }
}
