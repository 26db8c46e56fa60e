use serde::{Deserialize, Serialize};

use super::palette::default_color_cycle;
use super::style_set::{SplitStyle, StyleField, StyleParameterSet};
use super::StyleValue;

const SCATTER_FIELDS: [StyleField; 6] = [
    StyleField::new("c", "color"),
    StyleField::new("alpha", "alpha"),
    StyleField::new("marker", "marker"),
    StyleField::new("s", "size"),
    StyleField::new("cmap", "colormap"),
    StyleField::new("fc", "face_color"),
];

/// Marker styling for discrete-point series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterStyle {
    pub color: Option<StyleValue>,
    pub alpha: Option<StyleValue>,
    pub marker: Option<StyleValue>,
    pub size: Option<StyleValue>,
    pub colormap: Option<StyleValue>,
    pub face_color: Option<StyleValue>,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            color: Some(default_color_cycle()),
            alpha: None,
            marker: None,
            size: None,
            colormap: None,
            face_color: None,
        }
    }
}

impl ScatterStyle {
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
    pub fn with_size(mut self, value: impl Into<StyleValue>) -> Self {
        self.size = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_colormap(mut self, value: impl Into<StyleValue>) -> Self {
        self.colormap = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_face_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.face_color = Some(value.into());
        self
    }
}

impl StyleParameterSet for ScatterStyle {
    const NAME: &'static str = "ScatterStyle";
    const FIELDS: &'static [StyleField] = &SCATTER_FIELDS;

    fn get(&self, canonical: &str) -> Option<&StyleValue> {
        match canonical {
            "color" => self.color.as_ref(),
            "alpha" => self.alpha.as_ref(),
            "marker" => self.marker.as_ref(),
            "size" => self.size.as_ref(),
            "colormap" => self.colormap.as_ref(),
            "face_color" => self.face_color.as_ref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, canonical: &str) -> Option<&mut Option<StyleValue>> {
        match canonical {
            "color" => Some(&mut self.color),
            "alpha" => Some(&mut self.alpha),
            "marker" => Some(&mut self.marker),
            "size" => Some(&mut self.size),
            "colormap" => Some(&mut self.colormap),
            "face_color" => Some(&mut self.face_color),
            _ => None,
        }
    }
}

impl SplitStyle for ScatterStyle {}
