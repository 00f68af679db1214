//! Chart presenter: hands chart documents to an external charting engine.
//!
//! The engine sits behind [`ChartEngine`] so it can be swapped (a browser
//! plotting library through bindings, a native renderer, or [`HeadlessEngine`]
//! in tests) without touching the orchestration core.

use crate::domain::analysis::ChartDocument;

/// Engine configuration passed alongside every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            display_mode_bar: true,
            mode_bar_buttons_to_remove: vec!["lasso2d", "select2d"],
        }
    }
}

/// Capability interface of the charting engine.
pub trait ChartEngine {
    /// Draw `document` into the chart region, replacing anything already there.
    fn render(&mut self, document: &ChartDocument, options: &RenderOptions);
    /// Fit the current chart to the region after a viewport change.
    fn resize(&mut self);
    /// Remove the current chart, if any.
    fn clear(&mut self);
}

/// What the chart region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRegion {
    Placeholder(String),
    /// Error placeholder; the text is shown as `Error: {text}`.
    Error(String),
    Rendered {
        title: String,
    },
}

impl ChartRegion {
    /// Text a host would put in the placeholder box, if any.
    pub fn placeholder_text(&self) -> Option<String> {
        match self {
            Self::Placeholder(text) => Some(text.clone()),
            Self::Error(text) => Some(format!("Error: {}", text)),
            Self::Rendered { .. } => None,
        }
    }
}

pub const INITIAL_PLACEHOLDER: &str = "Enter a ticker symbol and click Analyze";
pub const NO_UPLOAD_PLACEHOLDER: &str = "Upload a CSV file to analyze";

pub struct ChartPresenter<E> {
    engine: E,
    options: RenderOptions,
    region: ChartRegion,
    document: Option<ChartDocument>,
    /// At most one resize subscription, bound to the chart currently rendered.
    resize_subscribed: bool,
}

impl<E: ChartEngine> ChartPresenter<E> {
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, RenderOptions::default())
    }

    pub fn with_options(engine: E, options: RenderOptions) -> Self {
        Self {
            engine,
            options,
            region: ChartRegion::Placeholder(INITIAL_PLACEHOLDER.to_string()),
            document: None,
            resize_subscribed: false,
        }
    }

    /// Replace whatever is shown with `document` and (re)subscribe to resizes.
    pub fn render(&mut self, document: ChartDocument, title: impl Into<String>) {
        self.detach();
        self.engine.render(&document, &self.options);
        self.document = Some(document);
        self.region = ChartRegion::Rendered {
            title: title.into(),
        };
        self.resize_subscribed = true;
    }

    /// Viewport changed. Returns whether the engine was asked to resize.
    pub fn on_viewport_resize(&mut self) -> bool {
        if self.resize_subscribed {
            self.engine.resize();
        }
        self.resize_subscribed
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.detach();
        self.region = ChartRegion::Error(message.into());
    }

    pub fn show_placeholder(&mut self, text: impl Into<String>) {
        self.detach();
        self.region = ChartRegion::Placeholder(text.into());
    }

    pub fn region(&self) -> &ChartRegion {
        &self.region
    }

    /// Latest close of the rendered price series, if a chart is shown.
    pub fn current_price(&self) -> Option<f64> {
        self.document.as_ref().and_then(ChartDocument::last_close)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn detach(&mut self) {
        if self.document.take().is_some() {
            self.engine.clear();
        }
        self.resize_subscribed = false;
    }
}

/// Engine that keeps the last document in memory instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct HeadlessEngine {
    pub document: Option<ChartDocument>,
    pub renders: usize,
    pub resizes: usize,
    pub clears: usize,
}

impl ChartEngine for HeadlessEngine {
    fn render(&mut self, document: &ChartDocument, _options: &RenderOptions) {
        self.document = Some(document.clone());
        self.renders += 1;
    }

    fn resize(&mut self) {
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.document = None;
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(close: f64) -> ChartDocument {
        ChartDocument::from_value(json!({"data": [{"close": [close - 1.0, close]}], "layout": {}}))
    }

    #[test]
    fn test_starts_with_placeholder_and_no_subscription() {
        let mut p = ChartPresenter::new(HeadlessEngine::default());
        assert!(matches!(p.region(), ChartRegion::Placeholder(_)));
        assert!(!p.on_viewport_resize());
        assert_eq!(p.engine().resizes, 0);
    }

    #[test]
    fn test_render_replaces_previous_chart() {
        let mut p = ChartPresenter::new(HeadlessEngine::default());
        p.render(doc(100.0), "A - 5m Timeframe");
        p.render(doc(200.0), "B - 5m Timeframe");
        assert_eq!(p.engine().renders, 2);
        assert_eq!(p.engine().clears, 1);
        assert_eq!(p.current_price(), Some(200.0));
        assert_eq!(
            p.region(),
            &ChartRegion::Rendered {
                title: "B - 5m Timeframe".to_string()
            }
        );
    }

    #[test]
    fn test_single_resize_subscription_after_rerenders() {
        let mut p = ChartPresenter::new(HeadlessEngine::default());
        p.render(doc(1.0), "t");
        p.render(doc(2.0), "t");
        p.render(doc(3.0), "t");
        assert!(p.on_viewport_resize());
        assert_eq!(p.engine().resizes, 1);
    }

    #[test]
    fn test_error_detaches_chart() {
        let mut p = ChartPresenter::new(HeadlessEngine::default());
        p.render(doc(1.0), "t");
        p.show_error("bad ticker");
        assert_eq!(p.region().placeholder_text().as_deref(), Some("Error: bad ticker"));
        assert_eq!(p.current_price(), None);
        assert!(p.engine().document.is_none());
        assert!(!p.on_viewport_resize());
    }

    #[test]
    fn test_render_options_default() {
        let o = RenderOptions::default();
        assert!(o.responsive);
        assert_eq!(o.mode_bar_buttons_to_remove, ["lasso2d", "select2d"]);
    }
}
