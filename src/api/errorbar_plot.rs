use tracing::debug;

use crate::core::{SeriesStyle, distribute_styles};
use crate::error::{PlotError, PlotResult};
use crate::render::PlotBackend;

use super::plotter::{non_empty, open_single_axis};
use super::{ErrorBarRequest, PlotAxes, PlotOptions, Plotter};

impl<B: PlotBackend> Plotter<B> {
    /// Draws one series with optional x and y error extents.
    ///
    /// Any [`SeriesStyle`] variant is accepted; an [`ErrorBarStyle`] adds the
    /// cap and error-line keys to the backend style mapping. Sequence values
    /// resolve to their first entry, as for the primary series of a dual-axis
    /// plot.
    ///
    /// [`ErrorBarStyle`]: crate::core::ErrorBarStyle
    pub fn plot_errorbar(
        &mut self,
        request: &ErrorBarRequest,
        options: &PlotOptions,
    ) -> PlotResult<PlotAxes> {
        if request.x.is_empty() {
            return Err(PlotError::EmptyData { series: "x" });
        }
        if request.y.is_empty() {
            return Err(PlotError::EmptyData { series: "y" });
        }
        if let Some(err) = &request.x_err {
            err.validate_len(request.x.len(), "x")?;
        }
        if let Some(err) = &request.y_err {
            err.validate_len(request.y.len(), "y")?;
        }

        let labels = request.labels.resolved();
        // One series: sequence values contribute their first entry.
        let style = distribute_styles(&SeriesStyle::mapping_or_empty(options.style.as_ref()), 1)
            .into_iter()
            .next()
            .unwrap_or_default();
        debug!(
            points = request.x.len(),
            x_err = request.x_err.is_some(),
            y_err = request.y_err.is_some(),
            "plot errorbar"
        );

        let layout = options.layout.as_ref().unwrap_or(&self.config.layout);
        let (mut scope, axis) = open_single_axis(&mut self.backend, options.axis, layout)?;
        let backend = scope.backend();

        let data_label = labels.data_label.as_deref().and_then(non_empty);
        backend.draw_error_series(
            axis,
            &request.x,
            &request.y,
            request.x_err.as_ref(),
            request.y_err.as_ref(),
            &style,
            data_label,
        )?;
        if let Some(label) = &labels.x_label {
            backend.set_x_label(axis, label);
        }
        if let Some(label) = &labels.y_label {
            backend.set_y_label(axis, label);
        }
        if let Some(title) = labels.title.as_deref().and_then(non_empty) {
            backend.set_title(axis, title);
        }
        if data_label.is_some() {
            backend.legend(&[axis]);
        }

        Ok(PlotAxes {
            primary: axis,
            secondary: None,
        })
    }
}
