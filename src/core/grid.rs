use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::StyleMap;

/// Rows × columns of a subplot grid; subplots are indexed row-major.
///
/// Both dimensions are at least one, including after deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridShape")]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawGridShape {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawGridShape> for GridShape {
    type Error = PlotError;

    fn try_from(raw: RawGridShape) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> PlotResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::InvalidData(format!(
                "subplot grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn single() -> Self {
        Self { rows: 1, cols: 1 }
    }

    #[must_use]
    pub fn rows(self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Number of subplots.
    #[must_use]
    pub fn count(self) -> usize {
        self.rows * self.cols
    }

    /// With a shared x axis only the last row carries an x label.
    #[must_use]
    pub fn shows_x_label(self, index: usize, shared_x: bool) -> bool {
        !shared_x || index >= self.count() - self.cols
    }

    /// With a shared y axis only the first column carries a y label.
    #[must_use]
    pub fn shows_y_label(self, index: usize, shared_y: bool) -> bool {
        !shared_y || index % self.cols == 0
    }
}

/// Arrangement of the two-subplot convenience layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Side by side, 1×2.
    #[default]
    Horizontal,
    /// Stacked, 2×1.
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn grid(self) -> GridShape {
        match self {
            Self::Horizontal => GridShape { rows: 1, cols: 2 },
            Self::Vertical => GridShape { rows: 2, cols: 1 },
        }
    }
}

impl FromStr for Orientation {
    type Err = PlotError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            _ => Err(PlotError::Orientation {
                token: token.to_owned(),
            }),
        }
    }
}

/// Fans one compact style mapping out to `count` subplots.
///
/// Sequence values are reused cyclically (`values[i % len]`) when they hold
/// fewer entries than there are subplots; scalars go to every subplot.
#[must_use]
pub fn distribute_styles(style: &StyleMap, count: usize) -> Vec<StyleMap> {
    (0..count)
        .map(|index| {
            style
                .iter()
                .map(|(key, value)| (key.clone(), value.cycled(index)))
                .collect()
        })
        .collect()
}

/// Per-subplot labels for a grid, one entry per subplot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLabels {
    pub x_labels: Vec<Option<String>>,
    pub y_labels: Vec<Option<String>>,
    pub data_labels: Vec<Option<String>>,
    pub subplot_titles: Vec<Option<String>>,
    pub title: Option<String>,
}

impl GridLabels {
    /// Templated labels for `count` subplots; ignores anything the caller set.
    #[must_use]
    pub fn auto(count: usize) -> Self {
        let x_labels: Vec<String> = (1..=count).map(|i| format!("X_{i}")).collect();
        let y_labels: Vec<String> = (1..=count).map(|i| format!("Y_{i}")).collect();
        let data_labels = x_labels
            .iter()
            .zip(&y_labels)
            .map(|(x, y)| Some(format!("{x} vs {y}")))
            .collect();

        Self {
            x_labels: x_labels.into_iter().map(Some).collect(),
            y_labels: y_labels.into_iter().map(Some).collect(),
            data_labels,
            subplot_titles: (0..count).map(|i| Some(format!("Subplot {i}"))).collect(),
            title: Some(format!("{count} Plotter")),
        }
    }

    /// Caller-provided labels, padded with unset entries up to `count`.
    #[must_use]
    pub fn padded(mut self, count: usize) -> Self {
        for labels in [
            &mut self.x_labels,
            &mut self.y_labels,
            &mut self.data_labels,
            &mut self.subplot_titles,
        ] {
            if labels.len() < count {
                labels.resize(count, None);
            }
        }
        self
    }
}
