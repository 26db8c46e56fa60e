use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

/// Compact style mapping handed to the drawing backend, keyed by short alias.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Canonical projection of a style set: every field, absent ones included.
pub type CanonicalMapping = IndexMap<&'static str, Option<StyleValue>>;

/// One atomic style value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleScalar {
    Bool(bool),
    Number(OrderedFloat<f64>),
    Text(String),
}

impl StyleScalar {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            Self::Bool(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) | Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Number(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for StyleScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for StyleScalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StyleScalar {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl From<i32> for StyleScalar {
    fn from(value: i32) -> Self {
        Self::Number(OrderedFloat(f64::from(value)))
    }
}

impl From<&str> for StyleScalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleScalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Value held by a populated style field.
///
/// A sequence carries one entry per paired series (dual-axis plots) or per
/// subplot (grid plots); the common case is a pair, hence the inline
/// capacity of two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Scalar(StyleScalar),
    Sequence(SmallVec<[StyleScalar; 2]>),
}

impl StyleValue {
    #[must_use]
    pub fn pair(first: impl Into<StyleScalar>, second: impl Into<StyleScalar>) -> Self {
        let mut values = SmallVec::new();
        values.push(first.into());
        values.push(second.into());
        Self::Sequence(values)
    }

    #[must_use]
    pub fn sequence<T, I>(values: I) -> Self
    where
        T: Into<StyleScalar>,
        I: IntoIterator<Item = T>,
    {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&StyleScalar> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[StyleScalar]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(values),
        }
    }

    /// Selects the value for slot `index`.
    ///
    /// Sequences wrap around (`values[index % len]`); scalars and empty
    /// sequences are returned unchanged.
    #[must_use]
    pub fn cycled(&self, index: usize) -> Self {
        match self {
            Self::Sequence(values) if !values.is_empty() => {
                Self::Scalar(values[index % values.len()].clone())
            }
            Self::Scalar(_) | Self::Sequence(_) => self.clone(),
        }
    }

    /// Divides a paired value into its first and second entries.
    ///
    /// Only sequences with at least two entries can be divided; entries past
    /// the second are dropped.
    pub fn split_pair(&self, field: &str) -> PlotResult<(Self, Self)> {
        match self {
            Self::Sequence(values) if values.len() >= 2 => Ok((
                Self::Scalar(values[0].clone()),
                Self::Scalar(values[1].clone()),
            )),
            Self::Sequence(_) => Err(PlotError::Shape {
                field: field.to_owned(),
                reason: "sequence has fewer than two values",
            }),
            Self::Scalar(_) => Err(PlotError::Shape {
                field: field.to_owned(),
                reason: "scalar value is not a pair",
            }),
        }
    }
}

macro_rules! scalar_into_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_into_value!(bool, f64, i32, &str, String, StyleScalar);

impl<T: Into<StyleScalar>, const N: usize> From<[T; N]> for StyleValue {
    fn from(values: [T; N]) -> Self {
        Self::sequence(values)
    }
}

impl<T: Into<StyleScalar>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        Self::sequence(values)
    }
}

#[cfg(test)]
mod tests {
    use super::{StyleScalar, StyleValue};

    #[test]
    fn cycled_wraps_sequence_and_keeps_scalar() {
        let seq = StyleValue::pair("-", "--");
        assert_eq!(seq.cycled(2), StyleValue::from("-"));
        assert_eq!(seq.cycled(3), StyleValue::from("--"));
        assert_eq!(StyleValue::from(2.0).cycled(5), StyleValue::from(2.0));
    }

    #[test]
    fn untagged_json_covers_every_shape() {
        let parsed: Vec<StyleValue> =
            serde_json::from_str(r#"[true, 2, "red", ["a", 0.5]]"#).expect("parse values");
        assert_eq!(parsed[0], StyleValue::Scalar(StyleScalar::Bool(true)));
        assert_eq!(parsed[1], StyleValue::from(2.0));
        assert_eq!(parsed[2], StyleValue::from("red"));
        assert_eq!(parsed[3], StyleValue::pair("a", 0.5));
    }
}
