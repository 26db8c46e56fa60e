use serde::{Deserialize, Serialize};

use super::style_set::{StyleField, StyleParameterSet};
use super::StyleValue;

/// Figure size applied when the layout does not specify one, in inches.
pub const DEFAULT_FIG_SIZE: [f64; 2] = [6.4, 4.8];

const LAYOUT_FIELDS: [StyleField; 3] = [
    StyleField::new("sharex", "share_x"),
    StyleField::new("sharey", "share_y"),
    StyleField::new("figsize", "fig_size"),
];

/// Figure-level layout options. Carries no color default and is never split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SubplotLayout {
    pub share_x: Option<StyleValue>,
    pub share_y: Option<StyleValue>,
    pub fig_size: Option<StyleValue>,
}

impl Default for SubplotLayout {
    fn default() -> Self {
        Self {
            share_x: None,
            share_y: None,
            fig_size: Some(StyleValue::from(DEFAULT_FIG_SIZE)),
        }
    }
}

impl SubplotLayout {
    #[must_use]
    pub fn with_share_x(mut self, share: bool) -> Self {
        self.share_x = Some(share.into());
        self
    }

    #[must_use]
    pub fn with_share_y(mut self, share: bool) -> Self {
        self.share_y = Some(share.into());
        self
    }

    #[must_use]
    pub fn with_fig_size(mut self, width: f64, height: f64) -> Self {
        self.fig_size = Some(StyleValue::pair(width, height));
        self
    }

    /// Whether the subplots share one x axis. Only a literal `true` counts.
    #[must_use]
    pub fn shares_x(&self) -> bool {
        flag(self.share_x.as_ref())
    }

    /// Whether the subplots share one y axis. Only a literal `true` counts.
    #[must_use]
    pub fn shares_y(&self) -> bool {
        flag(self.share_y.as_ref())
    }
}

fn flag(value: Option<&StyleValue>) -> bool {
    value
        .and_then(StyleValue::as_scalar)
        .and_then(|scalar| scalar.as_bool())
        .unwrap_or(false)
}

impl StyleParameterSet for SubplotLayout {
    const NAME: &'static str = "SubplotLayout";
    const FIELDS: &'static [StyleField] = &LAYOUT_FIELDS;

    fn get(&self, canonical: &str) -> Option<&StyleValue> {
        match canonical {
            "share_x" => self.share_x.as_ref(),
            "share_y" => self.share_y.as_ref(),
            "fig_size" => self.fig_size.as_ref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, canonical: &str) -> Option<&mut Option<StyleValue>> {
        match canonical {
            "share_x" => Some(&mut self.share_x),
            "share_y" => Some(&mut self.share_y),
            "fig_size" => Some(&mut self.fig_size),
            _ => None,
        }
    }
}
