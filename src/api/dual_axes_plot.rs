use std::path::Path;

use tracing::{debug, trace};

use crate::core::{DualAxisRequest, SeriesStyle, distribute_styles, read_two_column_file};
use crate::error::PlotResult;
use crate::render::PlotBackend;

use super::plotter::{non_empty, open_single_axis};
use super::{PlotAxes, PlotOptions, Plotter, SeriesLabels, XyyRequest};

impl<B: PlotBackend> Plotter<B> {
    /// Draws one series, or two series against a twin axis.
    ///
    /// The request is validated first, then unset labels are resolved. The
    /// primary series uses entry 0 of each style sequence and the secondary
    /// series entry 1.
    pub fn plot_with_dual_axes(
        &mut self,
        request: &DualAxisRequest,
        options: &PlotOptions,
    ) -> PlotResult<PlotAxes> {
        request.validate()?;
        let labels = request.resolve_labels();
        let mode = options.mode.unwrap_or(self.config.draw_mode);
        let styles = distribute_styles(&SeriesStyle::mapping_or_empty(options.style.as_ref()), 2);
        debug!(
            dual_y = request.use_dual_y,
            auto_label = request.auto_label,
            has_secondary = request.x2.is_some() || request.y2.is_some(),
            ?mode,
            "plot with dual axes"
        );

        let layout = options.layout.as_ref().unwrap_or(&self.config.layout);
        let (mut scope, primary) = open_single_axis(&mut self.backend, options.axis, layout)?;
        let backend = scope.backend();

        trace!(axis = primary.0, points = request.x1.len(), "draw primary series");
        backend.draw_series(
            primary,
            mode,
            &request.x1,
            &request.y1,
            &styles[0],
            non_empty(&labels.x1y1),
        )?;
        backend.set_x_label(primary, &labels.axis_labels[0]);
        backend.set_y_label(primary, &labels.axis_labels[1]);
        if !labels.title.is_empty() {
            backend.set_title(primary, &labels.title);
        }

        let mut secondary = None;
        if request.use_dual_y {
            let twin = backend.twin_x(primary)?;
            secondary = Some(twin);
            if let Some(y2) = &request.y2 {
                trace!(axis = twin.0, points = y2.len(), "draw secondary y series");
                backend.draw_series(
                    twin,
                    mode,
                    &request.x1,
                    y2,
                    &styles[1],
                    labels.x1y2.as_deref().and_then(non_empty),
                )?;
                backend.set_y_label(twin, &labels.axis_labels[2]);
            }
        } else if let Some(x2) = &request.x2 {
            let twin = backend.twin_y(primary)?;
            secondary = Some(twin);
            trace!(axis = twin.0, points = x2.len(), "draw secondary x series");
            backend.draw_series(
                twin,
                mode,
                x2,
                &request.y1,
                &styles[1],
                labels.x2y1.as_deref().and_then(non_empty),
            )?;
            backend.set_x_label(twin, &labels.axis_labels[2]);
        }

        if labels.has_series_label() {
            match secondary {
                Some(twin) => backend.legend(&[primary, twin]),
                None => backend.legend(&[primary]),
            }
        }

        Ok(PlotAxes { primary, secondary })
    }

    /// Draws `y` against `x` on a single axis.
    pub fn plot_xy(
        &mut self,
        x: &[f64],
        y: &[f64],
        labels: &SeriesLabels,
        options: &PlotOptions,
    ) -> PlotResult<PlotAxes> {
        let labels = labels.resolved();
        let mut request = DualAxisRequest::new(x.to_vec(), y.to_vec())
            .with_auto_label(labels.auto_label)
            .with_axis_labels([labels.x_label, labels.y_label, None]);
        request.x1y1_label = labels.data_label;
        request.title = labels.title;
        self.plot_with_dual_axes(&request, options)
    }

    /// Draws two y-series over one x-series, on twin y axes by default.
    pub fn plot_xyy(&mut self, request: &XyyRequest, options: &PlotOptions) -> PlotResult<PlotAxes> {
        let mut dual = DualAxisRequest::new(request.x.clone(), request.y1.clone())
            .with_secondary_y(request.y2.clone())
            .with_dual_y(request.use_dual_y)
            .with_auto_label(request.auto_label);

        if request.auto_label {
            dual = dual
                .with_axis_labels([Some("X"), Some("Y1"), Some("Y2")])
                .with_title("XYY plot")
                .with_x1y1_label("X vs Y1")
                .with_x1y2_label("X vs Y2");
        } else {
            dual = dual.with_axis_labels([
                request.x_label.clone(),
                request.y1_label.clone(),
                request.y2_label.clone(),
            ]);
            dual.title = request.title.clone();
            let [first, second] = request.data_labels.clone();
            dual.x1y1_label = first;
            dual.x1y2_label = second;
        }

        self.plot_with_dual_axes(&dual, options)
    }

    /// Reads an `(x, y)` text file with the configured delimiter and header
    /// policy and draws it as a single series.
    pub fn plot_two_column_file(
        &mut self,
        path: impl AsRef<Path>,
        labels: &SeriesLabels,
        options: &PlotOptions,
    ) -> PlotResult<PlotAxes> {
        let columns = read_two_column_file(path, self.config.delimiter, self.config.skip_header)?;
        self.plot_xy(&columns.x, &columns.y, labels, options)
    }
}
