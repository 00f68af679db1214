//! High-level client: `ZoneClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::analysis::client::Analysis;
use crate::domain::catalog::client::CatalogClient;
use crate::domain::catalog::Catalog;
use crate::domain::upload::client::Uploads;
use crate::error::ZoneError;
use crate::http::{RetryPolicy, ZoneHttp};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;
use web_time::Instant;

// Re-export sub-client types for convenience.
pub use crate::domain::analysis::client::Analysis as AnalysisClient;
pub use crate::domain::catalog::client::CatalogClient as CatalogSubClient;
pub use crate::domain::upload::client::Uploads as UploadsClient;

/// The primary entry point for talking to the zone analyzer backend.
///
/// Cheap to clone; clones share the connection pool and caches.
#[derive(Clone)]
pub struct ZoneClient {
    pub(crate) http: ZoneHttp,
    /// Catalog cache: (catalog, fetched_at)
    pub(crate) catalog_cache: Arc<RwLock<Option<(Catalog, Instant)>>>,
    pub(crate) catalog_cache_ttl: Duration,
    pub(crate) catalog_retry: RetryPolicy,
}

impl ZoneClient {
    pub fn builder() -> ZoneClientBuilder {
        ZoneClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { client: self }
    }

    pub fn uploads(&self) -> Uploads<'_> {
        Uploads { client: self }
    }

    pub fn catalog(&self) -> CatalogClient<'_> {
        CatalogClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.catalog_cache.write().await = None;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ZoneClientBuilder {
    base_url: String,
    timeout: Duration,
    catalog_cache_ttl: Duration,
    catalog_retry: RetryPolicy,
}

impl Default for ZoneClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            // Analyses fetch market data server-side and can be slow.
            timeout: Duration::from_secs(120),
            catalog_cache_ttl: Duration::from_secs(300),
            catalog_retry: RetryPolicy::Idempotent,
        }
    }
}

impl ZoneClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only; browsers apply their own).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn catalog_cache_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_cache_ttl = ttl;
        self
    }

    pub fn catalog_retry(mut self, retry: RetryPolicy) -> Self {
        self.catalog_retry = retry;
        self
    }

    pub fn build(self) -> Result<ZoneClient, ZoneError> {
        if self.base_url.trim().is_empty() {
            return Err(ZoneError::validation("Base URL must not be empty"));
        }
        Ok(ZoneClient {
            http: ZoneHttp::new(&self.base_url, self.timeout)?,
            catalog_cache: Arc::new(RwLock::new(None)),
            catalog_cache_ttl: self.catalog_cache_ttl,
            catalog_retry: self.catalog_retry,
        })
    }
}
