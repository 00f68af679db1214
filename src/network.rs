//! Network URL and endpoint constants for the zone analyzer backend.

/// Default REST API base URL (the backend's local development server).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const UPLOAD_PATH: &str = "/api/upload";
pub const CLEAR_UPLOAD_PATH: &str = "/api/clear-upload";
pub const INTERVALS_PATH: &str = "/api/intervals";
pub const PERIODS_PATH: &str = "/api/periods";

/// Multipart field the backend reads the uploaded CSV from.
pub const UPLOAD_FIELD: &str = "csvFile";
