//! Uploads sub-client: store and clear the server-held CSV.

use crate::client::ZoneClient;
use crate::domain::upload::{validate_selection, SelectedFile, UploadedFile};
use crate::error::ZoneError;

pub struct Uploads<'a> {
    pub(crate) client: &'a ZoneClient,
}

impl<'a> Uploads<'a> {
    /// Upload `file`, replacing whatever the server holds for this session.
    ///
    /// `None` (nothing selected) or a non-CSV name fails locally.
    pub async fn upload(&self, file: Option<&SelectedFile>) -> Result<UploadedFile, ZoneError> {
        let file = validate_selection(file)?;

        let resp = self
            .client
            .http
            .upload(file)
            .await
            .map_err(|e| ZoneError::from_http(e, "Failed to upload file"))?;

        if !resp.success {
            return Err(ZoneError::Server(
                resp.error.unwrap_or_else(|| "Failed to upload file".to_string()),
            ));
        }

        let filename = resp.filename.unwrap_or_else(|| file.name.clone());
        tracing::info!(filename = %filename, message = ?resp.message, "File uploaded");
        Ok(UploadedFile {
            filename,
            message: resp.message,
        })
    }

    /// Ask the server to drop the uploaded file. Succeeds only on `{success:true}`.
    pub async fn clear(&self) -> Result<(), ZoneError> {
        let resp = self
            .client
            .http
            .clear_upload()
            .await
            .map_err(|e| ZoneError::from_http(e, "Failed to clear upload"))?;

        if !resp.success {
            return Err(ZoneError::Server(
                resp.error.unwrap_or_else(|| "Failed to clear upload".to_string()),
            ));
        }
        tracing::info!("Upload cleared");
        Ok(())
    }
}
