//! Non-failing length and ratio parsers.
//!
//! These never produce an error; `None` is the invalid marker, so batch
//! callers can skip bad entries and keep going.

use boxkit_types::{LengthUnit, UnitContext};

use crate::parser::{parse_finite, split_length, split_ratio};

/// Parse `<n>`, `<n>px` or `<n>%` into pixels.
///
/// Percentages resolve against `percent_basis`. Container and viewport
/// units need a [`UnitContext`] and are rejected here; use
/// [`parse_length_in`] for those.
pub fn parse_length(input: &str, percent_basis: f64) -> Option<f64> {
    let input = input.trim();
    if let Some(percent) = input.strip_suffix('%') {
        return parse_finite(percent).map(|p| p * percent_basis / 100.0);
    }
    match split_length(input)? {
        (n, LengthUnit::Px) => Some(n),
        _ => None,
    }
}

/// Like [`parse_length`], also resolving relative units against `ctx`.
pub fn parse_length_in(input: &str, percent_basis: f64, ctx: &UnitContext) -> Option<f64> {
    let input = input.trim();
    if let Some(percent) = input.strip_suffix('%') {
        return parse_finite(percent).map(|p| p * percent_basis / 100.0);
    }
    split_length(input).map(|(n, unit)| ctx.resolve(n, unit))
}

/// Parse `<n>` or `<n>/<n>`; the result must be strictly positive.
pub fn parse_ratio(input: &str) -> Option<f64> {
    split_ratio(input.trim())
}
