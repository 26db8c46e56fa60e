use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use approx::assert_relative_eq;
use plotez::api::{PlotOptions, Plotter, PlotterConfig, SeriesLabels};
use plotez::core::{parse_two_columns, read_two_column_file};
use plotez::error::PlotError;
use plotez::render::{DrawCommand, RecordingBackend};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("plotez-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn parses_comma_delimited_rows() {
    let input = "0.0,1.5\n1.0, 2.5\n2.0 ,-3.25\n";
    let columns = parse_two_columns(Cursor::new(input), ',', false).expect("parse");

    assert_eq!(columns.x.len(), 3);
    assert_relative_eq!(columns.x[2], 2.0);
    assert_relative_eq!(columns.y[1], 2.5);
    assert_relative_eq!(columns.y[2], -3.25);
}

#[test]
fn skips_header_blank_and_comment_lines() {
    let input = "time,value\n\n# calibration run\n1,10\n\n2,20\n";
    let columns = parse_two_columns(Cursor::new(input), ',', true).expect("parse");

    assert_eq!(columns.x, vec![1.0, 2.0]);
    assert_eq!(columns.y, vec![10.0, 20.0]);
}

#[test]
fn whitespace_delimiter_splits_runs() {
    let input = "1\t  2\n 3    4 \n";
    let columns = parse_two_columns(Cursor::new(input), ' ', false).expect("parse");

    assert_eq!(columns.x, vec![1.0, 3.0]);
    assert_eq!(columns.y, vec![2.0, 4.0]);
}

#[test]
fn unparseable_cells_become_nan() {
    let columns = parse_two_columns(Cursor::new("1,abc\n2,3\n"), ',', false).expect("parse");
    assert!(columns.y[0].is_nan());
    assert_relative_eq!(columns.y[1], 3.0);
}

#[test]
fn wrong_row_width_names_the_line() {
    let err = parse_two_columns(Cursor::new("1,2\n3,4,5\n"), ',', false)
        .expect_err("three columns");
    assert!(matches!(err, PlotError::ColumnCount { line: 2, width: 3 }));

    let err = parse_two_columns(Cursor::new("header\n7\n"), ',', true).expect_err("one column");
    assert!(matches!(err, PlotError::ColumnCount { line: 2, width: 1 }));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("plotez-definitely-missing-file.csv");
    let err = read_two_column_file(&path, ',', false).expect_err("missing file");
    assert!(matches!(err, PlotError::Io(_)));
}

#[test]
fn reads_file_from_disk() {
    let path = temp_file("read.txt", "x y\n0.5 0.25\n1.5 2.25\n");
    let columns = read_two_column_file(&path, ' ', true).expect("read file");
    fs::remove_file(&path).ok();

    assert_relative_eq!(columns.x[0], 0.5);
    assert_relative_eq!(columns.y[1], 2.25);
}

#[test]
fn plotter_reads_file_with_configured_format() {
    let path = temp_file("plot.tsv", "t\tv\n1\t2\n2\t4\n3\t8\n");
    let config = PlotterConfig::default().with_file_format('\t', true);
    let mut plotter = Plotter::new(RecordingBackend::new(), config);

    let result = plotter.plot_two_column_file(&path, &SeriesLabels::auto(), &PlotOptions::new());
    fs::remove_file(&path).ok();
    result.expect("plot file");

    let drawn: Vec<_> = plotter
        .backend()
        .series()
        .filter_map(|command| match command {
            DrawCommand::Series { x, y, label, .. } => Some((x.clone(), y.clone(), label.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].0, vec![1.0, 2.0, 3.0]);
    assert_eq!(drawn[0].1, vec![2.0, 4.0, 8.0]);
    assert_eq!(drawn[0].2.as_deref(), Some("X vs Y"));
}

#[test]
fn plotter_surfaces_column_errors_before_drawing() {
    let path = temp_file("bad.csv", "1,2\n3\n");
    let mut plotter = Plotter::with_default_config(RecordingBackend::new());

    let result = plotter.plot_two_column_file(&path, &SeriesLabels::default(), &PlotOptions::new());
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(PlotError::ColumnCount { line: 2, width: 1 })));
    assert!(plotter.backend().commands().is_empty());
}
