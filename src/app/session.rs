//! Session: drives a [`Dispatcher`] against a [`Backend`].
//!
//! Commands are executed one at a time and their completions are fed back
//! through the same dispatcher, so an event queue is drained before
//! [`Session::dispatch`] returns.

use std::collections::VecDeque;

use crate::app::chart::ChartEngine;
use crate::app::dispatcher::Dispatcher;
use crate::app::events::{AppEvent, Command};
use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::domain::upload::{SelectedFile, UploadedFile};
use crate::error::ZoneError;

/// The three backend operations the orchestrator needs.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ZoneError>;
    async fn upload(&self, file: &SelectedFile) -> Result<UploadedFile, ZoneError>;
    async fn clear_upload(&self) -> Result<(), ZoneError>;
}

#[cfg(feature = "http")]
impl Backend for crate::client::ZoneClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ZoneError> {
        self.analysis().run(request).await
    }

    async fn upload(&self, file: &SelectedFile) -> Result<UploadedFile, ZoneError> {
        self.uploads().upload(Some(file)).await
    }

    async fn clear_upload(&self) -> Result<(), ZoneError> {
        self.uploads().clear().await
    }
}

/// Run one command and turn its outcome into the matching completion event.
pub async fn execute<B: Backend>(backend: &B, command: Command) -> AppEvent {
    match command {
        Command::Analyze { id, request } => AppEvent::ResponseReceived {
            id,
            outcome: backend.analyze(&request).await,
        },
        Command::Upload { file } => AppEvent::UploadCompleted(backend.upload(&file).await),
        Command::ClearUpload => AppEvent::ClearCompleted(backend.clear_upload().await),
    }
}

pub struct Session<B, E> {
    backend: B,
    dispatcher: Dispatcher<E>,
}

impl<B: Backend, E: ChartEngine> Session<B, E> {
    pub fn new(backend: B, engine: E) -> Self {
        Self {
            backend,
            dispatcher: Dispatcher::new(engine),
        }
    }

    /// Handle `event` and every completion it causes.
    pub async fn dispatch(&mut self, event: AppEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for command in self.dispatcher.handle(event) {
                queue.push_back(execute(&self.backend, command).await);
            }
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<E> {
        &self.dispatcher
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
