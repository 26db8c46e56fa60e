use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("axis labels must have exactly 3 entries, got {len}")]
    LabelShape { len: usize },

    #[error("primary {series} data is empty")]
    EmptyData { series: &'static str },

    #[error("dual {mode} plot requested but `{given}` was given")]
    AxisConflict {
        mode: &'static str,
        given: &'static str,
    },

    #[error("style field `{field}` cannot be split into two values: {reason}")]
    Shape { field: String, reason: &'static str },

    #[error("orientation must be `horizontal` or `vertical`, got `{token}`")]
    Orientation { token: String },

    #[error("line {line}: expected exactly two columns, found {width}")]
    ColumnCount { line: usize, width: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
