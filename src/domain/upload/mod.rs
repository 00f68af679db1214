//! Upload domain: the single server-held CSV slot.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::error::ZoneError;

pub use state::{UploadControls, UploadPhase, UploadSlot};

/// A file the user picked, not yet sent.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Only CSV files are accepted by the backend.
    pub fn is_csv(&self) -> bool {
        self.name
            .rsplit_once('.')
            .map(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
    }
}

/// Local checks before an upload: a file must be selected and must be a CSV.
pub fn validate_selection(file: Option<&SelectedFile>) -> Result<&SelectedFile, ZoneError> {
    match file {
        Some(f) if f.is_csv() => Ok(f),
        _ => Err(ZoneError::validation("Please select a CSV file")),
    }
}

/// The backend's confirmation of a stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_extension_check() {
        assert!(SelectedFile::new("prices.csv", Vec::<u8>::new()).is_csv());
        assert!(SelectedFile::new("PRICES.CSV", Vec::<u8>::new()).is_csv());
        assert!(!SelectedFile::new("prices.xlsx", Vec::<u8>::new()).is_csv());
        assert!(!SelectedFile::new("csv", Vec::<u8>::new()).is_csv());
        assert!(!SelectedFile::new(".csv", Vec::<u8>::new()).is_csv());
    }

    #[test]
    fn test_validate_selection() {
        assert!(matches!(validate_selection(None), Err(ZoneError::Validation(_))));
        let bad = SelectedFile::new("notes.txt", b"a".to_vec());
        assert!(validate_selection(Some(&bad)).is_err());
        let good = SelectedFile::new("data.csv", b"Date,Close\n".to_vec());
        assert_eq!(validate_selection(Some(&good)).unwrap().name, "data.csv");
    }

    #[test]
    fn test_debug_omits_contents() {
        let f = SelectedFile::new("data.csv", vec![1, 2, 3]);
        assert_eq!(format!("{:?}", f), "SelectedFile { name: \"data.csv\", len: 3 }");
    }
}
