use tracing::{debug, trace};

use crate::core::{
    GridLabels, GridShape, Orientation, SeriesStyle, StyleParameterSet, distribute_styles,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{FigureScope, PlotBackend};

use super::plotter::non_empty;
use super::{GridAxes, GridRequest, PlotOptions, Plotter};

impl<B: PlotBackend> Plotter<B> {
    /// Draws one series per subplot of a `grid`.
    ///
    /// Subplot `i` takes entry `i % len` of every style sequence. With a
    /// shared x axis only the last row is given x labels; with a shared y
    /// axis only the first column is given y labels.
    pub fn n_plotter(
        &mut self,
        request: &GridRequest,
        grid: GridShape,
        options: &PlotOptions,
    ) -> PlotResult<GridAxes> {
        let count = grid.count();
        if request.x.len() < count || request.y.len() < count {
            return Err(PlotError::InvalidData(format!(
                "{}x{} grid needs {count} series, got {} x and {} y",
                grid.rows(),
                grid.cols(),
                request.x.len(),
                request.y.len()
            )));
        }

        let labels = if request.auto_label {
            GridLabels::auto(count)
        } else {
            request.labels.clone().padded(count)
        };
        let styles = distribute_styles(&SeriesStyle::mapping_or_empty(options.style.as_ref()), count);
        let mode = options.mode.unwrap_or(self.config.draw_mode);
        let layout = options.layout.as_ref().unwrap_or(&self.config.layout);
        let (shared_x, shared_y) = (layout.shares_x(), layout.shares_y());
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            shared_x,
            shared_y,
            auto_label = request.auto_label,
            ?mode,
            "plot grid"
        );

        let mut scope = FigureScope::acquire(&mut self.backend, grid, &layout.to_compact_mapping())?;
        let figure = scope
            .figure()
            .cloned()
            .ok_or_else(|| PlotError::InvalidData("grid scope has no figure".to_owned()))?;
        if figure.axes.len() < count {
            return Err(PlotError::InvalidData(format!(
                "backend created {} axes for a {count}-subplot grid",
                figure.axes.len()
            )));
        }
        let backend = scope.backend();

        for (index, &axis) in figure.axes.iter().take(count).enumerate() {
            let data_label = labels.data_labels[index].as_deref().and_then(non_empty);
            trace!(index, axis = axis.0, "draw subplot series");
            backend.draw_series(
                axis,
                mode,
                &request.x[index],
                &request.y[index],
                &styles[index],
                data_label,
            )?;

            if let Some(label) = &labels.x_labels[index] {
                if grid.shows_x_label(index, shared_x) {
                    backend.set_x_label(axis, label);
                }
            }
            if let Some(label) = &labels.y_labels[index] {
                if grid.shows_y_label(index, shared_y) {
                    backend.set_y_label(axis, label);
                }
            }
            if data_label.is_some() {
                backend.legend(&[axis]);
            }
            if let Some(title) = &labels.subplot_titles[index] {
                backend.set_title(axis, title);
            }
        }
        if let Some(title) = &labels.title {
            backend.set_figure_title(figure.handle, title);
        }

        Ok(GridAxes {
            figure: figure.handle,
            axes: figure.axes,
        })
    }

    /// Two subplots side by side (`"horizontal"`/`"h"`) or stacked
    /// (`"vertical"`/`"v"`).
    pub fn two_subplots(
        &mut self,
        request: &GridRequest,
        orientation: &str,
        options: &PlotOptions,
    ) -> PlotResult<GridAxes> {
        let orientation: Orientation = orientation.parse()?;
        self.n_plotter(request, orientation.grid(), options)
    }
}
