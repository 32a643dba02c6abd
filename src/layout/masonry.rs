//! Columns and wrappers for JavaScript masonry libraries (Isotope and the
//! like), which position items themselves and only need fixed column and
//! gutter math.
//!
//! Each item carries half a gutter on both sides; the wrapper pulls its
//! edges out by the same amount so the outer items line up.

use crate::css::fraction::Fraction;
use crate::css::model::Style;
use crate::css::scalar::Length;
use crate::error::Result;
use crate::layout::utils::with_float_containment;

/// A masonry item spanning `value` (a fraction or a length) of the wrapper.
/// `none` clears the width and gutters.
pub fn masonry_column(value: &str, gutter: &Length, flex: bool) -> Result<Style> {
    let value = Fraction::parse(value)?;
    if value.is_none() {
        return Ok(Style::new()
            .declare("width", "auto")
            .declare("margin-left", "0")
            .declare("margin-right", "0"));
    }

    let mut style = if flex {
        Style::new().declare("flex", "0 0 auto")
    } else {
        Style::new().declare("float", "left")
    };

    if gutter.is_zero() {
        return Ok(style.declare("width", format!("calc(99.99% * {value})")));
    }

    let half = gutter.half();
    style = style
        .declare("width", format!("calc(99.99% * {value} - {gutter})"))
        .declare("margin-left", half.as_str())
        .declare("margin-right", half.as_str());
    Ok(style)
}

/// The element wrapping masonry items.
pub fn masonry_wrap(flex: bool, gutter: &Length) -> Style {
    let mut style = Style::new();
    if flex {
        style = style.declare("display", "flex").declare("flex-flow", "row wrap");
    }

    let pull = gutter.half().negate();
    style = style
        .declare("margin-left", pull.as_str())
        .declare("margin-right", pull.as_str());

    if flex {
        style
    } else {
        with_float_containment(style)
    }
}
