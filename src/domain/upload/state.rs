//! Upload slot state container: app-owned, client-provided transition logic.
//!
//! ```text
//! NoFile ─upload─▶ Uploading ─ok─▶ Uploaded ─analyze─▶ Analyzing ─done─▶ Uploaded
//!    ▲                 │ err           │
//!    └─────────────────┘               └─clear─▶ Clearing ─ok─▶ NoFile
//!                                                   │ err
//!                                                   └──────▶ Uploaded
//! ```
//!
//! The client only mirrors the server's slot; it changes state on confirmed
//! responses, never speculatively.

use crate::error::ZoneError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    NoFile,
    Uploading { name: String },
    Uploaded { filename: String },
    Analyzing { filename: String },
    Clearing { filename: String },
}

/// Which upload controls are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadControls {
    /// "Select file" form. Shown fresh (selection reset) whenever it reappears.
    pub form_visible: bool,
    /// "File loaded" box with the analyze and clear buttons.
    pub file_info_visible: bool,
    pub filename: Option<String>,
    pub analyze_enabled: bool,
    pub clear_enabled: bool,
}

/// Client-side mirror of the single server-held upload slot.
#[derive(Debug, Clone, Default)]
pub struct UploadSlot {
    phase: UploadPhase,
}

impl UploadSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    /// Name of the file the server holds, if any.
    pub fn filename(&self) -> Option<&str> {
        match &self.phase {
            UploadPhase::Uploaded { filename }
            | UploadPhase::Analyzing { filename }
            | UploadPhase::Clearing { filename } => Some(filename),
            UploadPhase::NoFile | UploadPhase::Uploading { .. } => None,
        }
    }

    pub fn can_analyze(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploaded { .. })
    }

    pub fn controls(&self) -> UploadControls {
        let has_file = self.filename().is_some();
        UploadControls {
            form_visible: !has_file,
            file_info_visible: has_file,
            filename: self.filename().map(str::to_string),
            analyze_enabled: self.can_analyze(),
            clear_enabled: self.can_analyze(),
        }
    }

    pub fn begin_upload(&mut self, name: &str) -> Result<(), ZoneError> {
        match self.phase {
            UploadPhase::NoFile => {
                self.phase = UploadPhase::Uploading {
                    name: name.to_string(),
                };
                Ok(())
            }
            UploadPhase::Uploading { .. } => {
                Err(ZoneError::validation("An upload is already in progress"))
            }
            _ => Err(ZoneError::validation(
                "Clear the current file before uploading another",
            )),
        }
    }

    pub fn upload_succeeded(&mut self, filename: &str) -> Result<(), ZoneError> {
        self.expect_uploading()?;
        self.phase = UploadPhase::Uploaded {
            filename: filename.to_string(),
        };
        Ok(())
    }

    pub fn upload_failed(&mut self) -> Result<(), ZoneError> {
        self.expect_uploading()?;
        self.phase = UploadPhase::NoFile;
        Ok(())
    }

    pub fn begin_analysis(&mut self) -> Result<(), ZoneError> {
        match &self.phase {
            UploadPhase::Uploaded { filename } => {
                self.phase = UploadPhase::Analyzing {
                    filename: filename.clone(),
                };
                Ok(())
            }
            UploadPhase::Analyzing { .. } => {
                Err(ZoneError::validation("Analysis already in progress"))
            }
            _ => Err(ZoneError::validation("Please upload a CSV file first")),
        }
    }

    /// Analysis finished (either way); the file stays on the server.
    pub fn analysis_finished(&mut self) {
        if let UploadPhase::Analyzing { filename } = &self.phase {
            self.phase = UploadPhase::Uploaded {
                filename: filename.clone(),
            };
        }
    }

    pub fn begin_clear(&mut self) -> Result<(), ZoneError> {
        match &self.phase {
            UploadPhase::Uploaded { filename } => {
                self.phase = UploadPhase::Clearing {
                    filename: filename.clone(),
                };
                Ok(())
            }
            UploadPhase::Analyzing { .. } => Err(ZoneError::validation(
                "Wait for the analysis to finish before clearing",
            )),
            _ => Err(ZoneError::validation("No uploaded file to clear")),
        }
    }

    pub fn clear_succeeded(&mut self) -> Result<(), ZoneError> {
        self.expect_clearing()?;
        self.phase = UploadPhase::NoFile;
        Ok(())
    }

    /// The server did not confirm; keep claiming the file is there.
    pub fn clear_failed(&mut self) -> Result<(), ZoneError> {
        let filename = self.expect_clearing()?.to_string();
        self.phase = UploadPhase::Uploaded { filename };
        Ok(())
    }

    fn expect_uploading(&self) -> Result<(), ZoneError> {
        match self.phase {
            UploadPhase::Uploading { .. } => Ok(()),
            _ => Err(ZoneError::validation("No upload in progress")),
        }
    }

    fn expect_clearing(&self) -> Result<&str, ZoneError> {
        match &self.phase {
            UploadPhase::Clearing { filename } => Ok(filename),
            _ => Err(ZoneError::validation("No clear in progress")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(name: &str) -> UploadSlot {
        let mut slot = UploadSlot::new();
        slot.begin_upload(name).unwrap();
        slot.upload_succeeded(name).unwrap();
        slot
    }

    #[test]
    fn test_upload_success_path() {
        let slot = uploaded("prices.csv");
        assert_eq!(slot.filename(), Some("prices.csv"));
        let controls = slot.controls();
        assert!(!controls.form_visible);
        assert!(controls.file_info_visible);
        assert!(controls.analyze_enabled);
    }

    #[test]
    fn test_upload_failure_returns_to_no_file() {
        let mut slot = UploadSlot::new();
        slot.begin_upload("prices.csv").unwrap();
        slot.upload_failed().unwrap();
        assert_eq!(slot.phase(), &UploadPhase::NoFile);
        assert!(slot.controls().form_visible);
    }

    #[test]
    fn test_analysis_round_trip_keeps_file() {
        let mut slot = uploaded("a.csv");
        slot.begin_analysis().unwrap();
        assert!(!slot.can_analyze());
        assert!(slot.begin_analysis().is_err());
        slot.analysis_finished();
        assert_eq!(
            slot.phase(),
            &UploadPhase::Uploaded {
                filename: "a.csv".to_string()
            }
        );
    }

    #[test]
    fn test_analysis_requires_upload() {
        let mut slot = UploadSlot::new();
        assert!(matches!(slot.begin_analysis(), Err(ZoneError::Validation(_))));
    }

    #[test]
    fn test_clear_success() {
        let mut slot = uploaded("a.csv");
        slot.begin_clear().unwrap();
        slot.clear_succeeded().unwrap();
        assert_eq!(slot.phase(), &UploadPhase::NoFile);
        assert_eq!(slot.filename(), None);
    }

    #[test]
    fn test_clear_failure_keeps_file() {
        let mut slot = uploaded("a.csv");
        slot.begin_clear().unwrap();
        slot.clear_failed().unwrap();
        assert_eq!(slot.filename(), Some("a.csv"));
        assert!(slot.can_analyze());
    }

    #[test]
    fn test_cannot_clear_during_analysis() {
        let mut slot = uploaded("a.csv");
        slot.begin_analysis().unwrap();
        assert!(slot.begin_clear().is_err());
    }

    #[test]
    fn test_second_upload_rejected_while_file_held() {
        let mut slot = uploaded("a.csv");
        assert!(slot.begin_upload("b.csv").is_err());
        assert_eq!(slot.filename(), Some("a.csv"));
    }

    #[test]
    fn test_stray_completions_are_rejected() {
        let mut slot = UploadSlot::new();
        assert!(slot.upload_succeeded("x.csv").is_err());
        assert!(slot.clear_succeeded().is_err());
        assert!(slot.clear_failed().is_err());
        assert_eq!(slot.phase(), &UploadPhase::NoFile);
    }
}
