use serde::{Deserialize, Serialize};

use super::palette::default_color_cycle;
use super::style_set::{SplitStyle, StyleField, StyleParameterSet};
use super::StyleValue;

pub(crate) const LINE_FIELDS: [StyleField; 9] = [
    StyleField::new("ls", "line_style"),
    StyleField::new("lw", "line_width"),
    StyleField::new("color", "color"),
    StyleField::new("alpha", "alpha"),
    StyleField::new("marker", "marker"),
    StyleField::new("ms", "marker_size"),
    StyleField::new("mec", "marker_edge_color"),
    StyleField::new("mfc", "marker_face_color"),
    StyleField::new("mew", "marker_edge_width"),
];

/// Line/marker styling for one or two connected series.
///
/// `color` defaults to the repeating palette from
/// [`default_color_cycle`](super::default_color_cycle).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub line_style: Option<StyleValue>,
    pub line_width: Option<StyleValue>,
    pub color: Option<StyleValue>,
    pub alpha: Option<StyleValue>,
    pub marker: Option<StyleValue>,
    pub marker_size: Option<StyleValue>,
    pub marker_edge_color: Option<StyleValue>,
    pub marker_face_color: Option<StyleValue>,
    pub marker_edge_width: Option<StyleValue>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_style: None,
            line_width: None,
            color: Some(default_color_cycle()),
            alpha: None,
            marker: None,
            marker_size: None,
            marker_edge_color: None,
            marker_face_color: None,
            marker_edge_width: None,
        }
    }
}

impl LineStyle {
    #[must_use]
    pub fn with_line_style(mut self, value: impl Into<StyleValue>) -> Self {
        self.line_style = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, value: impl Into<StyleValue>) -> Self {
        self.line_width = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.color = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, value: impl Into<StyleValue>) -> Self {
        self.alpha = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_marker_size(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker_size = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_marker_edge_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker_edge_color = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_marker_face_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker_face_color = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_marker_edge_width(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker_edge_width = Some(value.into());
        self
    }
}

impl StyleParameterSet for LineStyle {
    const NAME: &'static str = "LineStyle";
    const FIELDS: &'static [StyleField] = &LINE_FIELDS;

    fn get(&self, canonical: &str) -> Option<&StyleValue> {
        match canonical {
            "line_style" => self.line_style.as_ref(),
            "line_width" => self.line_width.as_ref(),
            "color" => self.color.as_ref(),
            "alpha" => self.alpha.as_ref(),
            "marker" => self.marker.as_ref(),
            "marker_size" => self.marker_size.as_ref(),
            "marker_edge_color" => self.marker_edge_color.as_ref(),
            "marker_face_color" => self.marker_face_color.as_ref(),
            "marker_edge_width" => self.marker_edge_width.as_ref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, canonical: &str) -> Option<&mut Option<StyleValue>> {
        match canonical {
            "line_style" => Some(&mut self.line_style),
            "line_width" => Some(&mut self.line_width),
            "color" => Some(&mut self.color),
            "alpha" => Some(&mut self.alpha),
            "marker" => Some(&mut self.marker),
            "marker_size" => Some(&mut self.marker_size),
            "marker_edge_color" => Some(&mut self.marker_edge_color),
            "marker_face_color" => Some(&mut self.marker_face_color),
            "marker_edge_width" => Some(&mut self.marker_edge_width),
            _ => None,
        }
    }
}

impl SplitStyle for LineStyle {}
