use serde::{Deserialize, Serialize};

use super::line_style::LINE_FIELDS;
use super::style_set::{SplitStyle, StyleField, StyleParameterSet, concat_fields};
use super::{LineStyle, StyleValue};

const ERROR_ONLY_FIELDS: [StyleField; 4] = [
    StyleField::new("capsize", "capsize"),
    StyleField::new("elinewidth", "error_line_width"),
    StyleField::new("ecolor", "error_color"),
    StyleField::new("capthick", "cap_thickness"),
];

const ERROR_BAR_FIELDS: [StyleField; LINE_FIELDS.len() + ERROR_ONLY_FIELDS.len()] =
    concat_fields(&LINE_FIELDS, &ERROR_ONLY_FIELDS);

/// Error-bar styling: an embedded [`LineStyle`] for the data line and
/// markers plus the cap and error-line fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBarStyle {
    #[serde(flatten)]
    pub line: LineStyle,
    /// Cap length in points.
    pub capsize: Option<StyleValue>,
    pub error_line_width: Option<StyleValue>,
    pub error_color: Option<StyleValue>,
    pub cap_thickness: Option<StyleValue>,
}

impl ErrorBarStyle {
    #[must_use]
    pub fn from_line(line: LineStyle) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_capsize(mut self, value: impl Into<StyleValue>) -> Self {
        self.capsize = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_error_line_width(mut self, value: impl Into<StyleValue>) -> Self {
        self.error_line_width = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_error_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.error_color = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cap_thickness(mut self, value: impl Into<StyleValue>) -> Self {
        self.cap_thickness = Some(value.into());
        self
    }
}

impl StyleParameterSet for ErrorBarStyle {
    const NAME: &'static str = "ErrorBarStyle";
    const FIELDS: &'static [StyleField] = &ERROR_BAR_FIELDS;

    fn get(&self, canonical: &str) -> Option<&StyleValue> {
        match canonical {
            "capsize" => self.capsize.as_ref(),
            "error_line_width" => self.error_line_width.as_ref(),
            "error_color" => self.error_color.as_ref(),
            "cap_thickness" => self.cap_thickness.as_ref(),
            _ => self.line.get(canonical),
        }
    }

    fn slot_mut(&mut self, canonical: &str) -> Option<&mut Option<StyleValue>> {
        match canonical {
            "capsize" => Some(&mut self.capsize),
            "error_line_width" => Some(&mut self.error_line_width),
            "error_color" => Some(&mut self.error_color),
            "cap_thickness" => Some(&mut self.cap_thickness),
            _ => self.line.slot_mut(canonical),
        }
    }
}

impl SplitStyle for ErrorBarStyle {}
