use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use plotez::core::{
    ErrorBarStyle, LineStyle, ScatterStyle, SplitStyle, StyleParameterSet, StyleScalar, StyleValue,
    distribute_styles,
};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = StyleScalar> {
    prop_oneof![
        any::<bool>().prop_map(StyleScalar::from),
        (-1_000i32..1_000).prop_map(StyleScalar::from),
        "[a-z#0-9]{1,8}".prop_map(StyleScalar::from),
    ]
}

fn value() -> impl Strategy<Value = StyleValue> {
    prop_oneof![
        scalar().prop_map(StyleValue::from),
        prop::collection::vec(scalar(), 1..6).prop_map(StyleValue::from),
    ]
}

fn pair() -> impl Strategy<Value = (StyleScalar, StyleScalar)> {
    (scalar(), scalar())
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn fully_populated<S: StyleParameterSet>(values: &[StyleValue]) -> S {
    S::populate(
        S::FIELDS
            .iter()
            .zip(values)
            .map(|(field, value)| (field.canonical, value.clone())),
    )
}

proptest! {
    #[test]
    fn line_style_round_trips_through_compact_mapping(
        values in prop::collection::vec(value(), 9)
    ) {
        let style: LineStyle = fully_populated(&values);
        let restored = LineStyle::populate(style.to_compact_mapping());
        prop_assert_eq!(restored, style);
    }

    #[test]
    fn error_bar_style_round_trips_through_compact_mapping(
        values in prop::collection::vec(value(), 13)
    ) {
        let style: ErrorBarStyle = fully_populated(&values);
        let restored = ErrorBarStyle::populate(style.to_compact_mapping());
        prop_assert_eq!(restored, style);
    }

    #[test]
    fn scatter_style_round_trips_through_compact_mapping(
        values in prop::collection::vec(value(), 6)
    ) {
        let style: ScatterStyle = fully_populated(&values);
        let restored = ScatterStyle::populate(style.to_compact_mapping());
        prop_assert_eq!(restored, style);
    }

    #[test]
    fn split_sends_first_entry_left_and_second_right(
        pairs in prop::collection::vec(pair(), 9)
    ) {
        let values: Vec<StyleValue> = pairs
            .iter()
            .map(|(a, b)| StyleValue::pair(a.clone(), b.clone()))
            .collect();
        let style: LineStyle = fully_populated(&values);

        let (first, second) = style.split().expect("every field is a pair");
        for (field, (a, b)) in LineStyle::FIELDS.iter().zip(&pairs) {
            prop_assert_eq!(first.get(field.canonical).cloned(), Some(StyleValue::from(a.clone())));
            prop_assert_eq!(second.get(field.canonical).cloned(), Some(StyleValue::from(b.clone())));
        }
    }

    #[test]
    fn equal_sets_have_equal_hashes(values in prop::collection::vec(value(), 9)) {
        let a: LineStyle = fully_populated(&values);
        let b = LineStyle::populate(a.to_canonical_mapping().into_iter().filter_map(
            |(key, value)| value.map(|value| (key, value)),
        ));

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn grid_distribution_cycles_sequences(
        entries in prop::collection::vec(scalar(), 1..5),
        fixed in scalar(),
        count in 1usize..16
    ) {
        let style = LineStyle::default()
            .with_color(entries.clone())
            .with_marker(fixed.clone());
        let per_subplot = distribute_styles(&style.to_compact_mapping(), count);

        prop_assert_eq!(per_subplot.len(), count);
        for (index, mapping) in per_subplot.iter().enumerate() {
            prop_assert_eq!(
                mapping["color"].clone(),
                StyleValue::from(entries[index % entries.len()].clone())
            );
            prop_assert_eq!(mapping["marker"].clone(), StyleValue::from(fixed.clone()));
        }
    }
}
