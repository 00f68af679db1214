//! Event and command type definitions.
//!
//! - [`AppEvent`]: everything that can happen: user actions and request completions
//! - [`Command`]: side effects the dispatcher asks its host to perform

use crate::app::mode::UiMode;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult, TickerQuery};
use crate::domain::settings::Settings;
use crate::domain::upload::{SelectedFile, UploadedFile};
use crate::error::ZoneError;

/// Identifier of one orchestrated analysis. Strictly increasing per dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of events the dispatcher understands.
#[derive(Debug)]
pub enum AppEvent {
    /// User picked a data source.
    ModeChanged(UiMode),
    /// Analyze button in API mode.
    SubmitAnalysis {
        query: TickerQuery,
        settings: Settings,
    },
    /// Analyze button next to an uploaded file.
    AnalyzeUploadRequested { settings: Settings },
    /// Upload form submitted; `None` when nothing was selected.
    UploadRequested { file: Option<SelectedFile> },
    /// Clear button next to an uploaded file.
    ClearUploadRequested,
    /// An analysis request finished.
    ResponseReceived {
        id: RequestId,
        outcome: Result<AnalysisResult, ZoneError>,
    },
    UploadCompleted(Result<UploadedFile, ZoneError>),
    ClearCompleted(Result<(), ZoneError>),
    ViewportResized,
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ModeChanged(_) => "ModeChanged",
            Self::SubmitAnalysis { .. } => "SubmitAnalysis",
            Self::AnalyzeUploadRequested { .. } => "AnalyzeUploadRequested",
            Self::UploadRequested { .. } => "UploadRequested",
            Self::ClearUploadRequested => "ClearUploadRequested",
            Self::ResponseReceived { .. } => "ResponseReceived",
            Self::UploadCompleted(_) => "UploadCompleted",
            Self::ClearCompleted(_) => "ClearCompleted",
            Self::ViewportResized => "ViewportResized",
        }
    }
}

/// Network work the host must perform. Each command yields exactly one
/// completion event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze {
        id: RequestId,
        request: AnalysisRequest,
    },
    Upload { file: SelectedFile },
    ClearUpload,
}
