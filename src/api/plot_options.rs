use crate::core::{SeriesStyle, SubplotLayout};
use crate::render::{AxisHandle, DrawMode};

/// Per-call drawing options. Unset fields fall back to the plotter config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    pub mode: Option<DrawMode>,
    pub style: Option<SeriesStyle>,
    pub layout: Option<SubplotLayout>,
    /// Draw onto an existing axis instead of creating a figure. Ignored by
    /// grid plots.
    pub axis: Option<AxisHandle>,
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scatter() -> Self {
        Self::default().with_mode(DrawMode::Scatter)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<SeriesStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: SubplotLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn on_axis(mut self, axis: AxisHandle) -> Self {
        self.axis = Some(axis);
        self
    }
}
