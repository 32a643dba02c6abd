//! `calc()` expressions for fractional sizes.
//!
//! With a gutter `g` and fraction `f`, an item spans `f` of the container
//! minus its share of the gutters: `calc(99.99% * f - (g - g * f))`. A
//! literal `0` gutter uses `calc(99.999999% * f)` instead; the extra nines
//! absorb rounding where the gutter term would otherwise do it.

use crate::css::scalar::Length;

/// Width or height of an item spanning `fraction` of its container.
pub fn fraction_size(fraction: &str, gutter: &Length) -> String {
    sized(fraction, gutter, None)
}

/// Like [`fraction_size`], with `extra` added inside the gutter branch.
pub fn fraction_size_plus(fraction: &str, gutter: &Length, extra: &str) -> String {
    sized(fraction, gutter, Some(extra))
}

fn sized(fraction: &str, gutter: &Length, extra: Option<&str>) -> String {
    if gutter.is_zero() {
        return format!("calc(99.999999% * {fraction})");
    }
    let share = format!("99.99% * {fraction} - ({gutter} - {gutter} * {fraction})");
    match extra {
        Some(extra) => format!("calc({share} + {extra})"),
        None => format!("calc({share})"),
    }
}
