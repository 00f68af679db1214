//! Wire types for `POST /api/upload` and `POST /api/clear-upload`.

use serde::{Deserialize, Serialize};

/// Upload response: `{success, message, filename}` or `{success:false, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Clear response: `{success:true}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearUploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
