//! Dual-axis plot requests: shape validation and the auto-label policy.
//!
//! A dual-Y plot draws `(x1, y1)` and `(x1, y2)` against two y axes sharing
//! the x axis; a dual-X plot draws `(x1, y1)` and `(x2, y1)` against two x
//! axes sharing the y axis. Validation runs before any label resolution or
//! drawing call.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

const DUAL_Y_AXIS_LABELS: [&str; 3] = ["X", "Y1", "Y2"];
const DUAL_X_AXIS_LABELS: [&str; 3] = ["X1", "Y", "X2"];
const DUAL_Y_SERIES_LABELS: [&str; 2] = ["X1 vs Y1", "X1 vs Y2"];
const DUAL_X_SERIES_LABELS: [&str; 2] = ["Y vs X1", "Y vs X2"];
const DEFAULT_TITLE: &str = "Plot";

/// Requested dual-axis plot. Ephemeral; built per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DualAxisRequest {
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    pub x2: Option<Vec<f64>>,
    pub y2: Option<Vec<f64>>,
    /// `[x, y1, y2]` for dual Y, `[x1, y, x2]` for dual X. Individual entries
    /// may be unset.
    pub axis_labels: Option<Vec<Option<String>>>,
    pub use_dual_y: bool,
    pub auto_label: bool,
    pub x1y1_label: Option<String>,
    pub x1y2_label: Option<String>,
    pub x2y1_label: Option<String>,
    pub title: Option<String>,
}

impl DualAxisRequest {
    #[must_use]
    pub fn new(x1: Vec<f64>, y1: Vec<f64>) -> Self {
        Self {
            x1,
            y1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_secondary_x(mut self, x2: Vec<f64>) -> Self {
        self.x2 = Some(x2);
        self
    }

    #[must_use]
    pub fn with_secondary_y(mut self, y2: Vec<f64>) -> Self {
        self.y2 = Some(y2);
        self
    }

    #[must_use]
    pub fn with_dual_y(mut self, use_dual_y: bool) -> Self {
        self.use_dual_y = use_dual_y;
        self
    }

    #[must_use]
    pub fn with_auto_label(mut self, auto_label: bool) -> Self {
        self.auto_label = auto_label;
        self
    }

    #[must_use]
    pub fn with_axis_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.axis_labels = Some(labels.into_iter().map(|l| l.map(Into::into)).collect());
        self
    }

    #[must_use]
    pub fn with_x1y1_label(mut self, label: impl Into<String>) -> Self {
        self.x1y1_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_x1y2_label(mut self, label: impl Into<String>) -> Self {
        self.x1y2_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_x2y1_label(mut self, label: impl Into<String>) -> Self {
        self.x2y1_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        validate_dual_axis_request(self)
    }

    #[must_use]
    pub fn resolve_labels(&self) -> ResolvedLabels {
        resolve_dual_axis_labels(self)
    }
}

/// Labels after the auto-label policy has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLabels {
    pub x1y1: String,
    /// Left unset under auto-labelling of a dual-X plot.
    pub x1y2: Option<String>,
    /// Left unset under auto-labelling of a dual-Y plot.
    pub x2y1: Option<String>,
    pub title: String,
    pub axis_labels: [String; 3],
}

impl ResolvedLabels {
    /// True when any series label is non-empty, i.e. a legend is warranted.
    #[must_use]
    pub fn has_series_label(&self) -> bool {
        !self.x1y1.is_empty()
            || self.x1y2.as_deref().is_some_and(|l| !l.is_empty())
            || self.x2y1.as_deref().is_some_and(|l| !l.is_empty())
    }
}

pub fn validate_dual_axis_request(request: &DualAxisRequest) -> PlotResult<()> {
    if let Some(labels) = &request.axis_labels {
        if labels.len() != 3 {
            return Err(PlotError::LabelShape { len: labels.len() });
        }
    }
    if request.x1.is_empty() {
        return Err(PlotError::EmptyData { series: "x" });
    }
    if request.y1.is_empty() {
        return Err(PlotError::EmptyData { series: "y" });
    }
    if request.use_dual_y && request.x2.is_some() {
        return Err(PlotError::AxisConflict {
            mode: "y-axis",
            given: "x2",
        });
    }
    if !request.use_dual_y && request.y2.is_some() {
        return Err(PlotError::AxisConflict {
            mode: "x-axis",
            given: "y2",
        });
    }
    Ok(())
}

/// Fills unset labels.
///
/// Caller-supplied values, empty strings included, are always kept. With
/// `auto_label` the mode's defaults fill the gaps; without it every gap
/// becomes `""`.
#[must_use]
pub fn resolve_dual_axis_labels(request: &DualAxisRequest) -> ResolvedLabels {
    let axis_slot = |index: usize| -> Option<String> {
        request
            .axis_labels
            .as_ref()
            .and_then(|labels| labels.get(index).cloned().flatten())
    };

    if !request.auto_label {
        let blank = |label: &Option<String>| label.clone().unwrap_or_default();
        return ResolvedLabels {
            x1y1: blank(&request.x1y1_label),
            x1y2: Some(blank(&request.x1y2_label)),
            x2y1: Some(blank(&request.x2y1_label)),
            title: blank(&request.title),
            axis_labels: [0, 1, 2].map(|i| axis_slot(i).unwrap_or_default()),
        };
    }

    let (axis_defaults, series_defaults) = if request.use_dual_y {
        (DUAL_Y_AXIS_LABELS, DUAL_Y_SERIES_LABELS)
    } else {
        (DUAL_X_AXIS_LABELS, DUAL_X_SERIES_LABELS)
    };
    let or_default = |label: &Option<String>, default: &str| {
        label.clone().unwrap_or_else(|| default.to_owned())
    };

    let (x1y2, x2y1) = if request.use_dual_y {
        (
            Some(or_default(&request.x1y2_label, series_defaults[1])),
            request.x2y1_label.clone(),
        )
    } else {
        (
            request.x1y2_label.clone(),
            Some(or_default(&request.x2y1_label, series_defaults[1])),
        )
    };

    ResolvedLabels {
        x1y1: or_default(&request.x1y1_label, series_defaults[0]),
        x1y2,
        x2y1,
        title: or_default(&request.title, DEFAULT_TITLE),
        axis_labels: [0, 1, 2]
            .map(|i| axis_slot(i).unwrap_or_else(|| axis_defaults[i].to_owned())),
    }
}
