mod dual_axes_plot;
mod errorbar_plot;
mod grid_plot;
mod plot_options;
mod plotter;
mod plotter_config;
mod requests;

pub use plot_options::PlotOptions;
pub use plotter::Plotter;
pub use plotter_config::PlotterConfig;
pub use requests::{
    ErrorBarRequest, GridAxes, GridRequest, PlotAxes, SeriesLabels, XyyRequest,
};
