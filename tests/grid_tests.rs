use plotez::core::{
    GridLabels, GridShape, LineStyle, Orientation, ScatterStyle, StyleParameterSet, StyleValue,
    distribute_styles,
};
use plotez::error::PlotError;

#[test]
fn grid_shape_rejects_zero_dimensions() {
    assert!(matches!(GridShape::new(0, 2), Err(PlotError::InvalidData(_))));
    assert!(matches!(GridShape::new(2, 0), Err(PlotError::InvalidData(_))));
    assert_eq!(GridShape::new(2, 3).expect("grid").count(), 6);
}

#[test]
fn two_colors_cycle_over_five_subplots() {
    let style = LineStyle::default().with_color(["red", "blue"]).with_line_width(1.5);
    let per_subplot = distribute_styles(&style.to_compact_mapping(), 5);

    let colors: Vec<_> = per_subplot
        .iter()
        .map(|mapping| mapping["color"].clone())
        .collect();
    assert_eq!(
        colors,
        ["red", "blue", "red", "blue", "red"].map(StyleValue::from).to_vec()
    );
    assert!(per_subplot
        .iter()
        .all(|mapping| mapping["lw"] == StyleValue::from(1.5)));
}

#[test]
fn default_palette_assigns_distinct_colors_per_subplot() {
    let per_subplot = distribute_styles(&ScatterStyle::default().to_compact_mapping(), 3);
    let colors: Vec<_> = per_subplot.iter().map(|mapping| mapping["c"].clone()).collect();
    assert_eq!(
        colors,
        ["#1f77b4", "#ff7f0e", "#2ca02c"].map(StyleValue::from).to_vec()
    );
}

#[test]
fn empty_style_yields_empty_mappings() {
    let per_subplot = distribute_styles(&Default::default(), 4);
    assert_eq!(per_subplot.len(), 4);
    assert!(per_subplot.iter().all(|mapping| mapping.is_empty()));
}

#[test]
fn auto_labels_are_templated_per_subplot() {
    let labels = GridLabels::auto(3);

    assert_eq!(labels.x_labels[0].as_deref(), Some("X_1"));
    assert_eq!(labels.y_labels[2].as_deref(), Some("Y_3"));
    assert_eq!(labels.data_labels[1].as_deref(), Some("X_2 vs Y_2"));
    assert_eq!(labels.subplot_titles[0].as_deref(), Some("Subplot 0"));
    assert_eq!(labels.subplot_titles[2].as_deref(), Some("Subplot 2"));
    assert_eq!(labels.title.as_deref(), Some("3 Plotter"));
}

#[test]
fn padded_labels_fill_missing_entries() {
    let labels = GridLabels {
        x_labels: vec![Some("a".to_owned())],
        ..GridLabels::default()
    }
    .padded(3);

    assert_eq!(labels.x_labels, vec![Some("a".to_owned()), None, None]);
    assert_eq!(labels.y_labels, vec![None; 3]);
    assert_eq!(labels.title, None);
}

#[test]
fn shared_y_keeps_only_first_column() {
    let grid = GridShape::new(2, 3).expect("grid");
    let shown: Vec<_> = (0..6).filter(|&i| grid.shows_y_label(i, true)).collect();
    assert_eq!(shown, vec![0, 3]);
    assert!((0..6).all(|i| grid.shows_y_label(i, false)));
    assert!((0..6).all(|i| grid.shows_x_label(i, false)));
}

#[test]
fn shared_x_on_two_by_two_grid() {
    let grid = GridShape::new(2, 2).expect("grid");
    let shown: Vec<_> = (0..4).filter(|&i| grid.shows_x_label(i, true)).collect();
    assert_eq!(shown, vec![2, 3]);
}

#[test]
fn orientation_tokens_map_to_grids() {
    for token in ["horizontal", "h"] {
        let orientation: Orientation = token.parse().expect("horizontal token");
        assert_eq!(orientation.grid(), GridShape::new(1, 2).expect("grid"));
    }
    for token in ["vertical", "v"] {
        let orientation: Orientation = token.parse().expect("vertical token");
        assert_eq!(orientation.grid(), GridShape::new(2, 1).expect("grid"));
    }

    let err = "diagonal".parse::<Orientation>().expect_err("unknown token");
    assert!(matches!(err, PlotError::Orientation { ref token } if token == "diagonal"));
}
