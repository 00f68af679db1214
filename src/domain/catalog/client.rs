//! Catalog sub-client: interval and period choices, cached.

use crate::client::ZoneClient;
use crate::domain::catalog::Catalog;
use crate::error::ZoneError;
use web_time::Instant;

pub struct CatalogClient<'a> {
    pub(crate) client: &'a ZoneClient,
}

impl<'a> CatalogClient<'a> {
    /// Fetch intervals and periods, served from cache while fresh.
    pub async fn get(&self) -> Result<Catalog, ZoneError> {
        if let Some((catalog, fetched_at)) = self.client.catalog_cache.read().await.as_ref() {
            if fetched_at.elapsed() < self.client.catalog_cache_ttl {
                return Ok(catalog.clone());
            }
        }

        let retry = self.client.catalog_retry.clone();
        let intervals = self
            .client
            .http
            .get_intervals(retry.clone())
            .await
            .map_err(|e| ZoneError::from_http(e, "Failed to load intervals"))?;
        let periods = self
            .client
            .http
            .get_periods(retry)
            .await
            .map_err(|e| ZoneError::from_http(e, "Failed to load periods"))?;

        let catalog = Catalog::from_wire(intervals, periods);
        *self.client.catalog_cache.write().await = Some((catalog.clone(), Instant::now()));
        Ok(catalog)
    }

    /// Like [`get`](Self::get), but falls back to the built-in catalog on failure.
    pub async fn get_or_default(&self) -> Catalog {
        match self.get().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, using built-in choices");
                Catalog::default()
            }
        }
    }
}
