pub mod dual_axis;
pub mod error_bar_style;
pub mod grid;
pub mod line_style;
pub mod palette;
pub mod scatter_style;
pub mod series_style;
pub mod style_set;
pub mod style_value;
pub mod subplot_layout;
pub mod two_column;

pub use dual_axis::{
    DualAxisRequest, ResolvedLabels, resolve_dual_axis_labels, validate_dual_axis_request,
};
pub use error_bar_style::ErrorBarStyle;
pub use grid::{GridLabels, GridShape, Orientation, distribute_styles};
pub use line_style::LineStyle;
pub use palette::{BASE_PALETTE, PALETTE_REPEATS, default_color_cycle};
pub use scatter_style::ScatterStyle;
pub use series_style::SeriesStyle;
pub use style_set::{SplitStyle, StyleField, StyleParameterSet};
pub use style_value::{CanonicalMapping, StyleMap, StyleScalar, StyleValue};
pub use subplot_layout::{DEFAULT_FIG_SIZE, SubplotLayout};
pub use two_column::{TwoColumns, parse_two_columns, read_two_column_file};
