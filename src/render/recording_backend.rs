use serde::{Deserialize, Serialize};

use crate::core::{GridShape, StyleMap};
use crate::error::{PlotError, PlotResult};
use crate::render::{AxisHandle, DrawMode, ErrorExtent, Figure, FigureHandle, PlotBackend};

/// One delegated drawing call as seen by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    CreateFigure {
        figure: FigureHandle,
        grid: GridShape,
        layout: StyleMap,
    },
    Series {
        axis: AxisHandle,
        mode: DrawMode,
        x: Vec<f64>,
        y: Vec<f64>,
        style: StyleMap,
        label: Option<String>,
    },
    ErrorSeries {
        axis: AxisHandle,
        x: Vec<f64>,
        y: Vec<f64>,
        x_err: Option<ErrorExtent>,
        y_err: Option<ErrorExtent>,
        style: StyleMap,
        label: Option<String>,
    },
    TwinX {
        source: AxisHandle,
        twin: AxisHandle,
    },
    TwinY {
        source: AxisHandle,
        twin: AxisHandle,
    },
    XLabel {
        axis: AxisHandle,
        label: String,
    },
    YLabel {
        axis: AxisHandle,
        label: String,
    },
    Title {
        axis: AxisHandle,
        title: String,
    },
    FigureTitle {
        figure: FigureHandle,
        title: String,
    },
    Legend {
        axes: Vec<AxisHandle>,
    },
    FinishFigure {
        figure: FigureHandle,
    },
}

/// Headless backend that records every call instead of rendering.
///
/// Series input is still checked (known axis, matching x/y lengths) so tests
/// catch malformed draw calls without a real backend.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<DrawCommand>,
    next_figure: usize,
    next_axis: usize,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Series and error-series commands, in draw order.
    pub fn series(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| {
            matches!(
                command,
                DrawCommand::Series { .. } | DrawCommand::ErrorSeries { .. }
            )
        })
    }

    #[must_use]
    pub fn finished_figures(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FinishFigure { .. }))
            .count()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.commands).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize draw commands: {e}"))
        })
    }

    fn issue_axis(&mut self) -> AxisHandle {
        let axis = AxisHandle(self.next_axis);
        self.next_axis += 1;
        axis
    }

    fn check_axis(&self, axis: AxisHandle) -> PlotResult<()> {
        if axis.0 >= self.next_axis {
            return Err(PlotError::InvalidData(format!(
                "unknown axis handle {}",
                axis.0
            )));
        }
        Ok(())
    }

    fn check_series(&self, axis: AxisHandle, x: &[f64], y: &[f64]) -> PlotResult<()> {
        self.check_axis(axis)?;
        if x.len() != y.len() {
            return Err(PlotError::InvalidData(format!(
                "series x/y lengths differ: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Ok(())
    }
}

impl PlotBackend for RecordingBackend {
    fn create_figure(&mut self, grid: GridShape, layout: &StyleMap) -> PlotResult<Figure> {
        let handle = FigureHandle(self.next_figure);
        self.next_figure += 1;
        let axes = (0..grid.count()).map(|_| self.issue_axis()).collect();
        self.commands.push(DrawCommand::CreateFigure {
            figure: handle,
            grid,
            layout: layout.clone(),
        });
        Ok(Figure { handle, axes })
    }

    fn draw_series(
        &mut self,
        axis: AxisHandle,
        mode: DrawMode,
        x: &[f64],
        y: &[f64],
        style: &StyleMap,
        label: Option<&str>,
    ) -> PlotResult<()> {
        self.check_series(axis, x, y)?;
        self.commands.push(DrawCommand::Series {
            axis,
            mode,
            x: x.to_vec(),
            y: y.to_vec(),
            style: style.clone(),
            label: label.map(str::to_owned),
        });
        Ok(())
    }

    fn draw_error_series(
        &mut self,
        axis: AxisHandle,
        x: &[f64],
        y: &[f64],
        x_err: Option<&ErrorExtent>,
        y_err: Option<&ErrorExtent>,
        style: &StyleMap,
        label: Option<&str>,
    ) -> PlotResult<()> {
        self.check_series(axis, x, y)?;
        self.commands.push(DrawCommand::ErrorSeries {
            axis,
            x: x.to_vec(),
            y: y.to_vec(),
            x_err: x_err.cloned(),
            y_err: y_err.cloned(),
            style: style.clone(),
            label: label.map(str::to_owned),
        });
        Ok(())
    }

    fn twin_x(&mut self, axis: AxisHandle) -> PlotResult<AxisHandle> {
        self.check_axis(axis)?;
        let twin = self.issue_axis();
        self.commands.push(DrawCommand::TwinX { source: axis, twin });
        Ok(twin)
    }

    fn twin_y(&mut self, axis: AxisHandle) -> PlotResult<AxisHandle> {
        self.check_axis(axis)?;
        let twin = self.issue_axis();
        self.commands.push(DrawCommand::TwinY { source: axis, twin });
        Ok(twin)
    }

    fn set_x_label(&mut self, axis: AxisHandle, label: &str) {
        self.commands.push(DrawCommand::XLabel {
            axis,
            label: label.to_owned(),
        });
    }

    fn set_y_label(&mut self, axis: AxisHandle, label: &str) {
        self.commands.push(DrawCommand::YLabel {
            axis,
            label: label.to_owned(),
        });
    }

    fn set_title(&mut self, axis: AxisHandle, title: &str) {
        self.commands.push(DrawCommand::Title {
            axis,
            title: title.to_owned(),
        });
    }

    fn set_figure_title(&mut self, figure: FigureHandle, title: &str) {
        self.commands.push(DrawCommand::FigureTitle {
            figure,
            title: title.to_owned(),
        });
    }

    fn legend(&mut self, axes: &[AxisHandle]) {
        self.commands.push(DrawCommand::Legend {
            axes: axes.to_vec(),
        });
    }

    fn finish_figure(&mut self, figure: FigureHandle) {
        self.commands.push(DrawCommand::FinishFigure { figure });
    }
}
