//! Status line: single, color-coded feedback channel. Last write wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Danger,
    Neutral,
}

impl Severity {
    /// Text color for the status line.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Success => "#26b067",
            Self::Danger => "#b02e26",
            Self::Info => "#3a6ea8",
            Self::Neutral => "#9e9e9e",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone)]
pub struct StatusReporter {
    current: StatusLine,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self {
            current: StatusLine {
                message: "Ready".to_string(),
                severity: Severity::Neutral,
            },
        }
    }
}

impl StatusReporter {
    pub fn report(&mut self, message: impl Into<String>, severity: Severity) {
        self.current = StatusLine {
            message: message.into(),
            severity,
        };
    }

    pub fn current(&self) -> &StatusLine {
        &self.current
    }
}
