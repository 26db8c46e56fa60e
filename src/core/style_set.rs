use std::hash::Hash;

use tracing::warn;

use crate::error::{PlotError, PlotResult};

use super::{CanonicalMapping, StyleMap, StyleValue};

/// One entry of a variant's alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleField {
    /// Short key passed to the drawing backend (`ls`, `mec`, ...).
    pub compact: &'static str,
    /// Full field name (`line_style`, `marker_edge_color`, ...).
    pub canonical: &'static str,
}

impl StyleField {
    #[must_use]
    pub const fn new(compact: &'static str, canonical: &'static str) -> Self {
        Self { compact, canonical }
    }
}

/// Joins two alias tables; used to extend a base table without copying it.
pub(crate) const fn concat_fields<const N: usize>(
    base: &[StyleField],
    extra: &[StyleField],
) -> [StyleField; N] {
    assert!(base.len() + extra.len() == N);
    let mut out = [StyleField::new("", ""); N];
    let mut i = 0;
    while i < base.len() {
        out[i] = base[i];
        i += 1;
    }
    let mut j = 0;
    while j < extra.len() {
        out[base.len() + j] = extra[j];
        j += 1;
    }
    out
}

/// Keyed bag of optional style attributes with a fixed alias table.
///
/// Implementors only expose field access; mapping projections and
/// `populate` are shared. `Default` must produce the variant's baseline
/// (absent fields plus any auto-populated defaults such as `color`).
pub trait StyleParameterSet: Clone + Default + PartialEq + Eq + Hash {
    /// Variant name used in diagnostics.
    const NAME: &'static str;

    /// Alias table in field order. Fixed per variant.
    const FIELDS: &'static [StyleField];

    /// Current value of a canonical field; `None` when absent or unknown.
    fn get(&self, canonical: &str) -> Option<&StyleValue>;

    /// Mutable slot of a canonical field; `None` for unknown names.
    fn slot_mut(&mut self, canonical: &str) -> Option<&mut Option<StyleValue>>;

    /// Looks a key up as an alias first, then as a canonical name.
    #[must_use]
    fn resolve_key(key: &str) -> Option<&'static StyleField> {
        Self::FIELDS
            .iter()
            .find(|field| field.compact == key)
            .or_else(|| Self::FIELDS.iter().find(|field| field.canonical == key))
    }

    /// Every field keyed by canonical name, absent ones as `None`.
    #[must_use]
    fn to_canonical_mapping(&self) -> CanonicalMapping {
        Self::FIELDS
            .iter()
            .map(|field| (field.canonical, self.get(field.canonical).cloned()))
            .collect()
    }

    /// Populated fields keyed by short alias; absent fields are omitted.
    #[must_use]
    fn to_compact_mapping(&self) -> StyleMap {
        Self::FIELDS
            .iter()
            .filter_map(|field| {
                self.get(field.canonical)
                    .map(|value| (field.compact.to_owned(), value.clone()))
            })
            .collect()
    }

    /// Builds a set from alias or canonical keys, applied in order so a later
    /// key overrides an earlier one that resolves to the same field.
    ///
    /// Keys matching neither table are ignored with a warning.
    fn populate<K, I>(mapping: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, StyleValue)>,
    {
        let mut instance = Self::default();
        for (key, value) in mapping {
            let key = key.as_ref();
            let Some(field) = Self::resolve_key(key) else {
                warn!(set = Self::NAME, key, "ignoring unknown style key");
                continue;
            };
            if let Some(slot) = instance.slot_mut(field.canonical) {
                *slot = Some(value);
            }
        }
        instance
    }

    /// Parses a JSON object of alias/canonical keys and populates from it.
    fn from_json_str(input: &str) -> PlotResult<Self> {
        let mapping: StyleMap = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse {} json: {e}", Self::NAME))
        })?;
        Ok(Self::populate(mapping))
    }
}

/// Style sets that can drive two paired series from one configuration.
pub trait SplitStyle: StyleParameterSet {
    /// Divides every populated field into its first and second entries.
    ///
    /// Fails with [`PlotError::Shape`] when a populated field is not a
    /// sequence of at least two values.
    fn split(&self) -> PlotResult<(Self, Self)> {
        let compact = self.to_compact_mapping();
        let mut first = Vec::with_capacity(compact.len());
        let mut second = Vec::with_capacity(compact.len());
        for (key, value) in compact {
            let (a, b) = value.split_pair(&key)?;
            first.push((key.clone(), a));
            second.push((key, b));
        }
        Ok((Self::populate(first), Self::populate(second)))
    }
}
