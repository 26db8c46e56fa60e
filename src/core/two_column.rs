use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, PlotResult};

/// x and y columns read from a two-column text source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwoColumns {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Reads a delimited two-column text file.
///
/// See [`parse_two_columns`] for the accepted format.
pub fn read_two_column_file(
    path: impl AsRef<Path>,
    delimiter: char,
    skip_header: bool,
) -> PlotResult<TwoColumns> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let columns = parse_two_columns(BufReader::new(file), delimiter, skip_header)?;
    debug!(
        path = %path.display(),
        rows = columns.x.len(),
        "read two-column file"
    );
    Ok(columns)
}

/// Parses delimited rows of exactly two cells.
///
/// The first line is dropped when `skip_header` is set. Blank lines and lines
/// starting with `#` are ignored. Cells that do not parse as numbers become
/// NaN. Any row with a width other than two fails with
/// [`PlotError::ColumnCount`].
pub fn parse_two_columns<R: BufRead>(
    reader: R,
    delimiter: char,
    skip_header: bool,
) -> PlotResult<TwoColumns> {
    let mut columns = TwoColumns::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if skip_header && index == 0 {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let cells: Vec<&str> = if delimiter.is_whitespace() {
            trimmed.split_whitespace().collect()
        } else {
            trimmed.split(delimiter).collect()
        };
        if cells.len() != 2 {
            return Err(PlotError::ColumnCount {
                line: index + 1,
                width: cells.len(),
            });
        }

        columns.x.push(parse_cell(cells[0]));
        columns.y.push(parse_cell(cells[1]));
    }

    Ok(columns)
}

fn parse_cell(cell: &str) -> f64 {
    cell.trim().parse().unwrap_or(f64::NAN)
}
