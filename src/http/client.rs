//! Low-level HTTP client: `ZoneHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). `ZoneClient` wraps this.

use crate::domain::analysis::wire::{AnalyzeRequestBody, AnalyzeResponse};
use crate::domain::catalog::wire::LabelMap;
use crate::domain::upload::wire::{ClearUploadResponse, UploadResponse};
use crate::domain::upload::SelectedFile;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the zone analyzer REST API.
#[derive(Clone)]
pub struct ZoneHttp {
    base_url: String,
    client: Client,
}

impl ZoneHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4);
        #[cfg(target_arch = "wasm32")]
        let builder = {
            let _ = timeout;
            Client::builder()
        };
        // The backend keys the uploaded file on its session cookie.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Analysis ─────────────────────────────────────────────────────────

    pub async fn analyze(&self, body: &AnalyzeRequestBody) -> Result<AnalyzeResponse, HttpError> {
        let url = self.url(network::ANALYZE_PATH);
        self.send(|| self.client.post(&url).json(body), RetryPolicy::None)
            .await
    }

    // ── Upload slot ──────────────────────────────────────────────────────

    pub async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, HttpError> {
        let url = self.url(network::UPLOAD_PATH);
        self.send(
            || {
                let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone());
                let form = reqwest::multipart::Form::new().part(network::UPLOAD_FIELD, part);
                self.client.post(&url).multipart(form)
            },
            RetryPolicy::None,
        )
        .await
    }

    pub async fn clear_upload(&self) -> Result<ClearUploadResponse, HttpError> {
        let url = self.url(network::CLEAR_UPLOAD_PATH);
        self.send(|| self.client.post(&url), RetryPolicy::None).await
    }

    // ── Catalog ──────────────────────────────────────────────────────────

    pub async fn get_intervals(&self, retry: RetryPolicy) -> Result<LabelMap, HttpError> {
        let url = self.url(network::INTERVALS_PATH);
        self.send(|| self.client.get(&url), retry).await
    }

    pub async fn get_periods(&self, retry: RetryPolicy) -> Result<LabelMap, HttpError> {
        let url = self.url(network::PERIODS_PATH);
        self.send(|| self.client.get(&url), retry).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Send the request built by `build`, rebuilding it for every attempt
    /// (multipart bodies cannot be cloned).
    async fn send<T, F>(&self, build: F, retry: RetryPolicy) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let config = match &retry {
            RetryPolicy::None => return self.do_request(build()).await,
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(build()).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if config.should_retry(&e) && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request"
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, HttpError> {
        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();
        let text = resp.text().await?;

        decode_body(status.as_u16(), status.is_success(), &text)
    }
}

/// Interpret a response body.
///
/// Every endpoint answers JSON. Non-2xx and `{"success": false}` bodies are
/// rejections carrying the `error` text.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: u16,
    is_success: bool,
    text: &str,
) -> Result<T, HttpError> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) if !is_success => {
            return Err(HttpError::Status {
                status,
                body: text.to_string(),
            })
        }
        Err(e) => return Err(HttpError::Decode(e.to_string())),
    };

    let flagged_failure = value.get("success").and_then(serde_json::Value::as_bool) == Some(false);
    if !is_success || flagged_failure {
        let message = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        tracing::warn!(status, message = ?message, "Request rejected by backend");
        return Err(HttpError::Rejected { status, message });
    }

    serde_json::from_value(value).map_err(|e| HttpError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let http = ZoneHttp::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(http.base_url(), "http://localhost:5000");
        assert_eq!(http.url("/api/analyze"), "http://localhost:5000/api/analyze");
    }

    #[test]
    fn test_decode_success_body() {
        let resp: UploadResponse =
            decode_body(200, true, r#"{"success": true, "filename": "a.csv"}"#).unwrap();
        assert_eq!(resp.filename.as_deref(), Some("a.csv"));
    }

    #[test]
    fn test_non_2xx_with_error_is_rejected() {
        let err = decode_body::<AnalyzeResponse>(400, false, r#"{"error": "bad ticker"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            HttpError::Rejected { status: 400, message: Some(ref m) } if m == "bad ticker"
        ));
    }

    #[test]
    fn test_success_false_is_rejected_even_on_200() {
        let err =
            decode_body::<UploadResponse>(200, true, r#"{"success": false, "error": "nope"}"#)
                .unwrap_err();
        assert!(matches!(err, HttpError::Rejected { status: 200, .. }));
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let err = decode_body::<ClearUploadResponse>(200, true, "<html>ok</html>").unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }

    #[test]
    fn test_non_json_failure_keeps_status() {
        let err = decode_body::<ClearUploadResponse>(502, false, "Bad Gateway").unwrap_err();
        assert!(matches!(err, HttpError::Status { status: 502, .. }));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let err = decode_body::<AnalyzeResponse>(200, true, r#"{"zones": []}"#).unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}
