use serde::{Deserialize, Serialize};

use super::style_set::StyleParameterSet;
use super::{ErrorBarStyle, LineStyle, ScatterStyle, StyleMap};

/// Style accepted by the plotting entry points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesStyle {
    Line(LineStyle),
    Scatter(ScatterStyle),
    ErrorBar(ErrorBarStyle),
}

impl SeriesStyle {
    #[must_use]
    pub fn compact_mapping(&self) -> StyleMap {
        match self {
            Self::Line(style) => style.to_compact_mapping(),
            Self::Scatter(style) => style.to_compact_mapping(),
            Self::ErrorBar(style) => style.to_compact_mapping(),
        }
    }

    /// Compact mapping of an optional style; an absent style draws with the
    /// backend's own defaults.
    #[must_use]
    pub fn mapping_or_empty(style: Option<&Self>) -> StyleMap {
        style.map(Self::compact_mapping).unwrap_or_default()
    }
}

impl From<LineStyle> for SeriesStyle {
    fn from(style: LineStyle) -> Self {
        Self::Line(style)
    }
}

impl From<ScatterStyle> for SeriesStyle {
    fn from(style: ScatterStyle) -> Self {
        Self::Scatter(style)
    }
}

impl From<ErrorBarStyle> for SeriesStyle {
    fn from(style: ErrorBarStyle) -> Self {
        Self::ErrorBar(style)
    }
}
