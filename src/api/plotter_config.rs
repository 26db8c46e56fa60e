use serde::{Deserialize, Serialize};

use crate::core::SubplotLayout;
use crate::error::{PlotError, PlotResult};
use crate::render::DrawMode;

/// Defaults applied by [`Plotter`](super::Plotter) when a call leaves them
/// unset.
///
/// Serializable so host applications can persist plotting defaults next to
/// their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    #[serde(default)]
    pub layout: SubplotLayout,
    #[serde(default)]
    pub draw_mode: DrawMode,
    /// Cell delimiter for two-column files. Whitespace splits on any run of
    /// whitespace.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub skip_header: bool,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            layout: SubplotLayout::default(),
            draw_mode: DrawMode::default(),
            delimiter: default_delimiter(),
            skip_header: false,
        }
    }
}

impl PlotterConfig {
    #[must_use]
    pub fn with_layout(mut self, layout: SubplotLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    #[must_use]
    pub fn with_file_format(mut self, delimiter: char, skip_header: bool) -> Self {
        self.delimiter = delimiter;
        self.skip_header = skip_header;
        self
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse plotter config: {e}")))
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plotter config: {e}"))
        })
    }
}

fn default_delimiter() -> char {
    ','
}
