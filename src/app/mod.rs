//! Orchestration layer: presentation state and the event dispatcher.
//!
//! Nothing here touches a DOM or a socket. A host (browser bindings, a
//! native shell, or a test) turns user input into [`AppEvent`]s, runs the
//! returned [`Command`]s, and reads the presenters back out.

pub mod chart;
pub mod dispatcher;
pub mod events;
pub mod mode;
pub mod session;
pub mod settings_form;
pub mod status;
pub mod zones_table;

pub use chart::{ChartEngine, ChartPresenter, ChartRegion, HeadlessEngine, RenderOptions};
pub use dispatcher::Dispatcher;
pub use events::{AppEvent, Command, RequestId};
pub use mode::{DataSourceModeController, PanelVisibility, UiMode};
pub use session::{execute, Backend, Session};
pub use settings_form::SettingsForm;
pub use status::{Severity, StatusLine, StatusReporter};
pub use zones_table::{ZoneRow, ZonesTable, ZonesTablePresenter};
