use plotez::api::{GridRequest, PlotOptions, Plotter};
use plotez::core::{GridLabels, GridShape, LineStyle, StyleValue, SubplotLayout};
use plotez::error::PlotError;
use plotez::render::{AxisHandle, DrawCommand, RecordingBackend};

fn plotter() -> Plotter<RecordingBackend> {
    Plotter::with_default_config(RecordingBackend::new())
}

fn series(count: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let x = (0..count).map(|i| vec![0.0, 1.0, i as f64]).collect();
    let y = (0..count).map(|i| vec![1.0, 2.0, (i * i) as f64]).collect();
    (x, y)
}

fn labelled_axes(commands: &[DrawCommand], x_axis: bool) -> Vec<usize> {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::XLabel { axis, .. } if x_axis => Some(axis.0),
            DrawCommand::YLabel { axis, .. } if !x_axis => Some(axis.0),
            _ => None,
        })
        .collect()
}

#[test]
fn grid_with_shared_axes_suppresses_inner_labels() {
    let mut plotter = plotter();
    let (x, y) = series(4);
    let request = GridRequest::new(x, y).with_auto_label(true);
    let layout = SubplotLayout::default().with_share_x(true).with_share_y(true);

    let grid = GridShape::new(2, 2).expect("grid");
    let axes = plotter
        .n_plotter(&request, grid, &PlotOptions::new().with_layout(layout))
        .expect("grid plot");
    assert_eq!(axes.axes, (0..4).map(AxisHandle).collect::<Vec<_>>());

    let commands = plotter.backend().commands();
    assert_eq!(labelled_axes(commands, true), vec![2, 3]);
    assert_eq!(labelled_axes(commands, false), vec![0, 2]);
    assert!(matches!(
        &commands[0],
        DrawCommand::CreateFigure { layout, .. }
            if layout["sharex"] == StyleValue::from(true) && layout["sharey"] == StyleValue::from(true)
    ));
}

#[test]
fn grid_without_sharing_labels_every_subplot() {
    let mut plotter = plotter();
    let (x, y) = series(6);
    let request = GridRequest::new(x, y).with_auto_label(true);

    plotter
        .n_plotter(&request, GridShape::new(2, 3).expect("grid"), &PlotOptions::new())
        .expect("grid plot");

    let commands = plotter.backend().commands();
    assert_eq!(labelled_axes(commands, true), (0..6).collect::<Vec<_>>());
    assert_eq!(labelled_axes(commands, false), (0..6).collect::<Vec<_>>());
    assert!(commands.iter().any(|c| matches!(
        c,
        DrawCommand::XLabel { axis: AxisHandle(4), label } if label == "X_5"
    )));
    assert!(commands.iter().any(|c| matches!(
        c,
        DrawCommand::Title { axis: AxisHandle(5), title } if title == "Subplot 5"
    )));
    assert!(commands.iter().any(|c| matches!(
        c,
        DrawCommand::FigureTitle { title, .. } if title == "6 Plotter"
    )));
    let legends = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Legend { .. }))
        .count();
    assert_eq!(legends, 6);
    assert_eq!(plotter.backend().finished_figures(), 1);
}

#[test]
fn grid_styles_cycle_over_subplots() {
    let mut plotter = plotter();
    let (x, y) = series(3);
    let style = LineStyle::default().with_color(["red", "blue"]).with_marker("o");

    plotter
        .n_plotter(
            &GridRequest::new(x, y),
            GridShape::new(1, 3).expect("grid"),
            &PlotOptions::new().with_style(style),
        )
        .expect("grid plot");

    let colors: Vec<_> = plotter
        .backend()
        .series()
        .filter_map(|command| match command {
            DrawCommand::Series { style, .. } => Some(style["color"].clone()),
            _ => None,
        })
        .collect();
    assert_eq!(colors, ["red", "blue", "red"].map(StyleValue::from).to_vec());
}

#[test]
fn caller_labels_shorter_than_grid_are_padded() {
    let mut plotter = plotter();
    let (x, y) = series(3);
    let labels = GridLabels {
        x_labels: vec![Some("first".to_owned())],
        data_labels: vec![None, Some("middle".to_owned())],
        ..GridLabels::default()
    };

    plotter
        .n_plotter(
            &GridRequest::new(x, y).with_labels(labels),
            GridShape::new(3, 1).expect("grid"),
            &PlotOptions::new(),
        )
        .expect("grid plot");

    let commands = plotter.backend().commands();
    assert_eq!(labelled_axes(commands, true), vec![0]);
    assert!(labelled_axes(commands, false).is_empty());
    let legends: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Legend { axes } => Some(axes.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(legends, vec![vec![AxisHandle(1)]]);
    assert!(!commands
        .iter()
        .any(|c| matches!(c, DrawCommand::FigureTitle { .. } | DrawCommand::Title { .. })));
}

#[test]
fn grid_needs_one_series_per_subplot() {
    let mut plotter = plotter();
    let (x, y) = series(3);

    let err = plotter
        .n_plotter(
            &GridRequest::new(x, y),
            GridShape::new(2, 2).expect("grid"),
            &PlotOptions::new(),
        )
        .expect_err("three series for four subplots");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert!(plotter.backend().commands().is_empty());
}

#[test]
fn zero_dimension_grid_never_reaches_the_backend() {
    assert!(matches!(GridShape::new(0, 3), Err(PlotError::InvalidData(_))));
    assert!(serde_json::from_str::<GridShape>(r#"{"rows": 3, "cols": 0}"#).is_err());

    let mut plotter = plotter();
    let result = serde_json::from_str::<GridShape>(r#"{"rows": 0, "cols": 3}"#)
        .map_err(|e| PlotError::InvalidData(e.to_string()))
        .and_then(|grid| {
            plotter.n_plotter(&GridRequest::new(Vec::new(), Vec::new()), grid, &PlotOptions::new())
        });
    assert!(matches!(result, Err(PlotError::InvalidData(_))));
    assert!(plotter.backend().commands().is_empty());
}

#[test]
fn two_subplots_follow_orientation() {
    let mut plotter = plotter();
    let (x, y) = series(2);
    let request = GridRequest::new(x, y);

    plotter
        .two_subplots(&request, "v", &PlotOptions::new())
        .expect("vertical");
    plotter
        .two_subplots(&request, "horizontal", &PlotOptions::new())
        .expect("horizontal");

    let grids: Vec<_> = plotter
        .backend()
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::CreateFigure { grid, .. } => Some((grid.rows(), grid.cols())),
            _ => None,
        })
        .collect();
    assert_eq!(grids, vec![(2, 1), (1, 2)]);
    assert_eq!(plotter.backend().finished_figures(), 2);
}

#[test]
fn two_subplots_rejects_unknown_orientation() {
    let mut plotter = plotter();
    let (x, y) = series(2);

    let err = plotter
        .two_subplots(&GridRequest::new(x, y), "sideways", &PlotOptions::new())
        .expect_err("bad token");
    assert!(matches!(err, PlotError::Orientation { ref token } if token == "sideways"));
    assert!(plotter.backend().commands().is_empty());
}
