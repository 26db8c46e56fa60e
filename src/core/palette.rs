use super::StyleValue;

/// Base categorical palette, in cycle order.
pub const BASE_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Number of times the base palette is repeated in the default color cycle.
pub const PALETTE_REPEATS: usize = 10;

/// Default `color` for color-bearing style sets: the base palette repeated
/// [`PALETTE_REPEATS`] times.
#[must_use]
pub fn default_color_cycle() -> StyleValue {
    StyleValue::sequence(
        BASE_PALETTE
            .iter()
            .copied()
            .cycle()
            .take(BASE_PALETTE.len() * PALETTE_REPEATS),
    )
}
