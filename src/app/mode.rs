//! Data source mode: remote ticker fetch vs. uploaded file.

/// Which data source the user is working with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Api,
    File,
}

/// Visibility of the two settings panels. Derived from the mode, so exactly
/// one is ever visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub api_panel: bool,
    pub file_panel: bool,
}

/// Two-state switch gating panels and actions.
///
/// Switching never touches in-flight requests.
#[derive(Debug, Clone, Default)]
pub struct DataSourceModeController {
    mode: UiMode,
}

impl DataSourceModeController {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn select(&mut self, mode: UiMode) -> PanelVisibility {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "Data source mode changed");
        }
        self.mode = mode;
        self.panels()
    }

    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility {
            api_panel: self.mode == UiMode::Api,
            file_panel: self.mode == UiMode::File,
        }
    }

    /// Whether an action belonging to `mode` is currently enabled.
    pub fn allows(&self, mode: UiMode) -> bool {
        self.mode == mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_api_mode() {
        let c = DataSourceModeController::default();
        assert_eq!(
            c.panels(),
            PanelVisibility {
                api_panel: true,
                file_panel: false
            }
        );
    }

    #[test]
    fn test_exactly_one_panel_for_any_toggle_sequence() {
        let mut c = DataSourceModeController::default();
        let sequence = [
            UiMode::File,
            UiMode::File,
            UiMode::Api,
            UiMode::File,
            UiMode::Api,
            UiMode::Api,
        ];
        for mode in sequence {
            let p = c.select(mode);
            assert!(p.api_panel ^ p.file_panel);
            assert_eq!(p.api_panel, mode == UiMode::Api);
            assert_eq!(p.file_panel, mode == UiMode::File);
        }
    }

    #[test]
    fn test_allows_only_current_mode() {
        let c = DataSourceModeController::new(UiMode::File);
        assert!(c.allows(UiMode::File));
        assert!(!c.allows(UiMode::Api));
    }
}
