//! The analysis orchestrator: a single dispatcher for every [`AppEvent`].
//!
//! `handle` is synchronous and performs no I/O: it updates presentation state
//! and returns the [`Command`]s to run. The host runs them (sequentially via
//! [`Session`](crate::app::session::Session), or concurrently) and feeds each
//! completion back as an event.
//!
//! Every analysis gets a fresh [`RequestId`]. Only the completion of the latest
//! id reaches the presenters; older ones are dropped. The busy indicator is
//! derived from the set of pending requests, so it cannot outlive them.

use std::collections::HashMap;

use crate::app::chart::{ChartEngine, ChartPresenter, NO_UPLOAD_PLACEHOLDER};
use crate::app::events::{AppEvent, Command, RequestId};
use crate::app::mode::{DataSourceModeController, PanelVisibility, UiMode};
use crate::app::status::{Severity, StatusLine, StatusReporter};
use crate::app::zones_table::{ZonesTable, ZonesTablePresenter, NO_UPLOAD_MESSAGE};
use crate::domain::analysis::{AnalysisRequest, AnalysisResult, DataSource};
use crate::domain::upload::{validate_selection, UploadControls, UploadPhase, UploadSlot, UploadedFile};
use crate::error::{ErrorKind, ZoneError};

pub struct Dispatcher<E> {
    mode: DataSourceModeController,
    status: StatusReporter,
    chart: ChartPresenter<E>,
    zones: ZonesTablePresenter,
    upload: UploadSlot,
    chart_title: Option<String>,
    next_id: u64,
    latest: Option<RequestId>,
    /// Pending analyses → whether each used the uploaded file.
    pending: HashMap<RequestId, bool>,
}

impl<E: ChartEngine> Dispatcher<E> {
    pub fn new(engine: E) -> Self {
        Self {
            mode: DataSourceModeController::default(),
            status: StatusReporter::default(),
            chart: ChartPresenter::new(engine),
            zones: ZonesTablePresenter::default(),
            upload: UploadSlot::new(),
            chart_title: None,
            next_id: 1,
            latest: None,
            pending: HashMap::new(),
        }
    }

    /// Route one event. Returns the commands the host must execute.
    pub fn handle(&mut self, event: AppEvent) -> Vec<Command> {
        tracing::trace!(event = event.name(), "Dispatching event");
        match event {
            AppEvent::ModeChanged(mode) => {
                self.mode.select(mode);
                vec![]
            }
            AppEvent::SubmitAnalysis { query, settings } => {
                if !self.action_enabled(UiMode::Api, "SubmitAnalysis") {
                    return vec![];
                }
                let request = AnalysisRequest::for_ticker(query, settings);
                if let Err(e) = request.validate() {
                    self.present_error(&e);
                    return vec![];
                }
                vec![self.issue_analysis(request, "Analyzing data...")]
            }
            AppEvent::AnalyzeUploadRequested { settings } => {
                if !self.action_enabled(UiMode::File, "AnalyzeUploadRequested") {
                    return vec![];
                }
                // Analyze is disabled while the upload is being analyzed.
                if matches!(self.upload.phase(), UploadPhase::Analyzing { .. }) {
                    tracing::debug!("Ignoring analyze click during upload analysis");
                    return vec![];
                }
                if let Err(e) = self.upload.begin_analysis() {
                    self.present_error(&e);
                    return vec![];
                }
                let request = AnalysisRequest::for_upload(settings);
                vec![self.issue_analysis(request, "Analyzing uploaded data...")]
            }
            AppEvent::ResponseReceived { id, outcome } => {
                self.complete_analysis(id, outcome);
                vec![]
            }
            AppEvent::UploadRequested { file } => {
                if !self.action_enabled(UiMode::File, "UploadRequested") {
                    return vec![];
                }
                let file = match validate_selection(file.as_ref()) {
                    Ok(f) => f.clone(),
                    Err(e) => {
                        self.report_error(&e);
                        return vec![];
                    }
                };
                if let Err(e) = self.upload.begin_upload(&file.name) {
                    self.report_error(&e);
                    return vec![];
                }
                self.status.report("Uploading file...", Severity::Info);
                vec![Command::Upload { file }]
            }
            AppEvent::UploadCompleted(outcome) => {
                self.complete_upload(outcome);
                vec![]
            }
            AppEvent::ClearUploadRequested => {
                if !self.action_enabled(UiMode::File, "ClearUploadRequested") {
                    return vec![];
                }
                if let Err(e) = self.upload.begin_clear() {
                    self.report_error(&e);
                    return vec![];
                }
                vec![Command::ClearUpload]
            }
            AppEvent::ClearCompleted(outcome) => {
                self.complete_clear(outcome);
                vec![]
            }
            AppEvent::ViewportResized => {
                self.chart.on_viewport_resize();
                vec![]
            }
        }
    }

    // ── View accessors ───────────────────────────────────────────────────

    pub fn mode(&self) -> UiMode {
        self.mode.mode()
    }

    pub fn panels(&self) -> PanelVisibility {
        self.mode.panels()
    }

    pub fn status(&self) -> &StatusLine {
        self.status.current()
    }

    /// Loading overlay visibility.
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty() || matches!(self.upload.phase(), UploadPhase::Uploading { .. })
    }

    pub fn chart(&self) -> &ChartPresenter<E> {
        &self.chart
    }

    pub fn chart_title(&self) -> Option<&str> {
        self.chart_title.as_deref()
    }

    pub fn zones_table(&self) -> &ZonesTable {
        self.zones.table()
    }

    pub fn upload_phase(&self) -> &UploadPhase {
        self.upload.phase()
    }

    pub fn upload_controls(&self) -> UploadControls {
        self.upload.controls()
    }

    /// Id of the most recently issued analysis.
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn action_enabled(&self, mode: UiMode, action: &'static str) -> bool {
        let enabled = self.mode.allows(mode);
        if !enabled {
            tracing::debug!(action, mode = ?self.mode.mode(), "Ignoring action for inactive mode");
        }
        enabled
    }

    /// Busy goes up (the id enters `pending`) before the command leaves.
    fn issue_analysis(&mut self, request: AnalysisRequest, progress: &str) -> Command {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.pending
            .insert(id, matches!(request.source, DataSource::Uploaded));
        if let Some(prev) = self.latest.replace(id) {
            if self.pending.contains_key(&prev) {
                tracing::debug!(superseded = %prev, request_id = %id, "Superseding pending analysis");
            }
        }
        self.status.report(progress, Severity::Info);
        tracing::debug!(request_id = %id, "Issuing analysis");
        Command::Analyze { id, request }
    }

    fn complete_analysis(&mut self, id: RequestId, outcome: Result<AnalysisResult, ZoneError>) {
        // Bookkeeping first, on every path, so busy always clears.
        let Some(used_upload) = self.pending.remove(&id) else {
            tracing::warn!(request_id = %id, "Completion for unknown request");
            return;
        };
        if used_upload {
            self.upload.analysis_finished();
        }

        if self.latest != Some(id) {
            tracing::debug!(request_id = %id, latest = ?self.latest, "Discarding stale analysis response");
            return;
        }

        match outcome {
            Ok(result) => {
                let title = result.title();
                let AnalysisResult { chart, zones, .. } = result;
                self.chart.render(chart, title.clone());
                self.chart_title = Some(title);
                // Price comes from the series just handed to the engine.
                let current_price = self.chart.current_price();
                self.zones.render(&zones, current_price);
                self.status.report("Analysis complete", Severity::Success);
                tracing::info!(request_id = %id, zones = zones.len(), "Analysis presented");
            }
            Err(e) => {
                tracing::warn!(request_id = %id, error = %e, "Analysis failed");
                self.present_error(&e);
            }
        }
    }

    fn complete_upload(&mut self, outcome: Result<UploadedFile, ZoneError>) {
        match outcome {
            Ok(uploaded) => {
                if let Err(e) = self.upload.upload_succeeded(&uploaded.filename) {
                    tracing::warn!(error = %e, "Upload completion without pending upload");
                    return;
                }
                self.status.report(
                    "File uploaded. Click Analyze to process it.",
                    Severity::Success,
                );
            }
            Err(e) => {
                if let Err(stray) = self.upload.upload_failed() {
                    tracing::warn!(error = %stray, "Upload failure without pending upload");
                }
                tracing::warn!(error = %e, "Upload failed");
                self.report_error(&e);
            }
        }
    }

    fn complete_clear(&mut self, outcome: Result<(), ZoneError>) {
        match outcome {
            Ok(()) => {
                if let Err(e) = self.upload.clear_succeeded() {
                    tracing::warn!(error = %e, "Clear completion without pending clear");
                    return;
                }
                self.chart.show_placeholder(NO_UPLOAD_PLACEHOLDER);
                self.chart_title = None;
                self.zones.show_placeholder(NO_UPLOAD_MESSAGE);
                self.status.report("Upload cleared", Severity::Info);
            }
            Err(e) => {
                if let Err(stray) = self.upload.clear_failed() {
                    tracing::warn!(error = %stray, "Clear failure without pending clear");
                }
                tracing::warn!(error = %e, "Clear failed");
                self.report_error(&e);
            }
        }
    }

    /// Analysis-path errors: chart placeholder plus danger status.
    fn present_error(&mut self, err: &ZoneError) {
        self.chart.show_error(err.user_message());
        self.chart_title = None;
        self.report_error(err);
    }

    /// Status-only error. Validation messages are shown verbatim, everything
    /// else as `Error: {message}`.
    fn report_error(&mut self, err: &ZoneError) {
        let text = match err.kind() {
            ErrorKind::Validation => err.user_message(),
            ErrorKind::Transport | ErrorKind::Server => format!("Error: {}", err.user_message()),
        };
        self.status.report(text, Severity::Danger);
    }
}
