mod figure_scope;
mod recording_backend;

pub use figure_scope::FigureScope;
pub use recording_backend::{DrawCommand, RecordingBackend};

use serde::{Deserialize, Serialize};

use crate::core::{GridShape, StyleMap};
use crate::error::{PlotError, PlotResult};

/// Opaque figure identifier issued by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureHandle(pub usize);

/// Opaque axis identifier issued by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisHandle(pub usize);

/// A freshly created figure and its subplot axes in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub handle: FigureHandle,
    pub axes: Vec<AxisHandle>,
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Connected line through the points.
    #[default]
    Line,
    /// Discrete markers.
    Scatter,
}

/// Error extent of one axis of an error-bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorExtent {
    Symmetric(Vec<f64>),
    Asymmetric { lower: Vec<f64>, upper: Vec<f64> },
}

impl ErrorExtent {
    /// Checks every error vector has one entry per data point.
    pub fn validate_len(&self, expected: usize, axis: &str) -> PlotResult<()> {
        let lengths = match self {
            Self::Symmetric(values) => vec![values.len()],
            Self::Asymmetric { lower, upper } => vec![lower.len(), upper.len()],
        };
        for len in lengths {
            if len != expected {
                return Err(PlotError::InvalidData(format!(
                    "{axis} error has {len} values, expected {expected}"
                )));
            }
        }
        Ok(())
    }
}

/// Drawing capabilities consumed by the plotting entry points.
///
/// Implementations own all rendering state. Cosmetic setters are
/// best-effort and cannot fail.
pub trait PlotBackend {
    /// Creates a figure with `grid.count()` axes.
    fn create_figure(&mut self, grid: GridShape, layout: &StyleMap) -> PlotResult<Figure>;

    fn draw_series(
        &mut self,
        axis: AxisHandle,
        mode: DrawMode,
        x: &[f64],
        y: &[f64],
        style: &StyleMap,
        label: Option<&str>,
    ) -> PlotResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn draw_error_series(
        &mut self,
        axis: AxisHandle,
        x: &[f64],
        y: &[f64],
        x_err: Option<&ErrorExtent>,
        y_err: Option<&ErrorExtent>,
        style: &StyleMap,
        label: Option<&str>,
    ) -> PlotResult<()>;

    /// Secondary axis sharing the x axis (independent y).
    fn twin_x(&mut self, axis: AxisHandle) -> PlotResult<AxisHandle>;

    /// Secondary axis sharing the y axis (independent x).
    fn twin_y(&mut self, axis: AxisHandle) -> PlotResult<AxisHandle>;

    fn set_x_label(&mut self, axis: AxisHandle, label: &str);

    fn set_y_label(&mut self, axis: AxisHandle, label: &str);

    fn set_title(&mut self, axis: AxisHandle, title: &str);

    fn set_figure_title(&mut self, figure: FigureHandle, title: &str);

    /// One legend on the first axis collecting the series of every axis given.
    fn legend(&mut self, axes: &[AxisHandle]);

    /// Finalizes layout of a figure created by [`PlotBackend::create_figure`].
    fn finish_figure(&mut self, figure: FigureHandle);
}
