//! # zonechart
//!
//! Client and orchestration core for a supply/demand zone charting service,
//! usable from native hosts and from WASM in the browser.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Settings, zones, chart documents, upload slot (always available, WASM-safe)
//! 2. **HTTP API**: `ZoneHttp` with one method per endpoint and per-call retry policies
//! 3. **High-Level Client**: `ZoneClient` with nested sub-clients and a cached catalog
//! 4. **Orchestration**: `Dispatcher` and presenters driven by a closed event set
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zonechart::prelude::*;
//!
//! let client = ZoneClient::builder()
//!     .base_url("http://127.0.0.1:5000")
//!     .build()?;
//!
//! let mut session = Session::new(client, HeadlessEngine::default());
//! session
//!     .dispatch(AppEvent::SubmitAnalysis {
//!         query: TickerQuery::new("aapl", Interval::Minute5, Period::Days60),
//!         settings: SettingsForm::default().collect(),
//!     })
//!     .await;
//! println!("{}", session.dispatcher().status().message);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Default URL and endpoint paths.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ZoneClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Orchestration ───────────────────────────────────────────────────

/// Event dispatcher, presenters and the session driver.
pub mod app;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{DetectionMethod, Interval, Period, Ticker, ZoneDisplay};

    // Domain types
    pub use crate::domain::analysis::{
        AnalysisRequest, AnalysisResult, ChartDocument, DataSource, DataSourceKind, TickerQuery,
    };
    pub use crate::domain::catalog::{Catalog, Choice};
    pub use crate::domain::settings::Settings;
    pub use crate::domain::upload::{
        SelectedFile, UploadControls, UploadPhase, UploadSlot, UploadedFile,
    };
    pub use crate::domain::zone::{Zone, ZoneInfo, ZoneType};

    // Errors
    pub use crate::error::{ErrorKind, HttpError, ZoneError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AnalysisClient, CatalogSubClient, UploadsClient, ZoneClient, ZoneClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Orchestration
    pub use crate::app::{
        AppEvent, Backend, ChartEngine, ChartRegion, Command, DataSourceModeController,
        Dispatcher, HeadlessEngine, PanelVisibility, RenderOptions, RequestId, Session,
        SettingsForm, Severity, StatusLine, UiMode, ZoneRow, ZonesTable,
    };
}
