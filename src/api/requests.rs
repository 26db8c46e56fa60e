use serde::{Deserialize, Serialize};

use crate::core::GridLabels;
use crate::render::{AxisHandle, ErrorExtent, FigureHandle};

/// Labels for a single-series plot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesLabels {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub title: Option<String>,
    pub data_label: Option<String>,
    /// Replaces every label with `X`, `Y`, `Plot` and `X vs Y`.
    pub auto_label: bool,
}

impl SeriesLabels {
    #[must_use]
    pub fn auto() -> Self {
        Self {
            auto_label: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_data_label(mut self, label: impl Into<String>) -> Self {
        self.data_label = Some(label.into());
        self
    }

    /// Labels with the single-series auto policy applied.
    #[must_use]
    pub fn resolved(&self) -> Self {
        if !self.auto_label {
            return self.clone();
        }
        Self {
            x_label: Some("X".to_owned()),
            y_label: Some("Y".to_owned()),
            title: Some("Plot".to_owned()),
            data_label: Some("X vs Y".to_owned()),
            auto_label: true,
        }
    }
}

/// Two y-series over one shared x-series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyyRequest {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
    pub x_label: Option<String>,
    pub y1_label: Option<String>,
    pub y2_label: Option<String>,
    pub title: Option<String>,
    pub data_labels: [Option<String>; 2],
    /// Defaults to `true`; `false` requests a dual-X plot, which rejects `y2`.
    pub use_dual_y: bool,
    /// Replaces every label with `X`, `Y1`, `Y2`, `XYY plot`, `X vs Y1` and
    /// `X vs Y2`.
    pub auto_label: bool,
}

impl XyyRequest {
    #[must_use]
    pub fn new(x: Vec<f64>, y1: Vec<f64>, y2: Vec<f64>) -> Self {
        Self {
            x,
            y1,
            y2,
            x_label: None,
            y1_label: None,
            y2_label: None,
            title: None,
            data_labels: [None, None],
            use_dual_y: true,
            auto_label: false,
        }
    }

    #[must_use]
    pub fn with_auto_label(mut self, auto_label: bool) -> Self {
        self.auto_label = auto_label;
        self
    }

    #[must_use]
    pub fn with_dual_y(mut self, use_dual_y: bool) -> Self {
        self.use_dual_y = use_dual_y;
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x: impl Into<String>,
        y1: impl Into<String>,
        y2: impl Into<String>,
    ) -> Self {
        self.x_label = Some(x.into());
        self.y1_label = Some(y1.into());
        self.y2_label = Some(y2.into());
        self
    }

    #[must_use]
    pub fn with_data_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.data_labels = [Some(first.into()), Some(second.into())];
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One series with optional error extents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBarRequest {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_err: Option<ErrorExtent>,
    pub y_err: Option<ErrorExtent>,
    pub labels: SeriesLabels,
}

impl ErrorBarRequest {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_err(mut self, err: ErrorExtent) -> Self {
        self.x_err = Some(err);
        self
    }

    #[must_use]
    pub fn with_y_err(mut self, err: ErrorExtent) -> Self {
        self.y_err = Some(err);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: SeriesLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// One series per subplot, row-major.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridRequest {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub labels: GridLabels,
    /// Replaces `labels` with [`GridLabels::auto`].
    pub auto_label: bool,
}

impl GridRequest {
    #[must_use]
    pub fn new(x: Vec<Vec<f64>>, y: Vec<Vec<f64>>) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: GridLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_auto_label(mut self, auto_label: bool) -> Self {
        self.auto_label = auto_label;
        self
    }
}

/// Axes drawn by a single or dual-axis plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotAxes {
    pub primary: AxisHandle,
    /// Twin axis of a dual-axis plot.
    pub secondary: Option<AxisHandle>,
}

/// Figure and subplot axes drawn by a grid plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAxes {
    pub figure: FigureHandle,
    pub axes: Vec<AxisHandle>,
}
