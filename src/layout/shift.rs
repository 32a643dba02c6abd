//! Source ordering: shift an element along the row or column axis.

use crate::config::Direction;
use crate::css::fraction::Fraction;
use crate::css::model::Style;
use crate::css::scalar::Length;
use crate::error::Result;
use crate::layout::calc::fraction_size_plus;

/// Move an element by `value` of its container, relative to where it would
/// otherwise be. Positive values move right (or down for columns), negative
/// values move left (or up). `none` puts the element back in place.
pub fn move_by(value: &str, direction: Direction, gutter: &Length) -> Result<Style> {
    let fraction = Fraction::parse(value)?;
    let side = match direction {
        Direction::Row => "left",
        Direction::Column => "top",
    };

    if fraction.is_none() {
        return Ok(Style::new()
            .declare("position", "static")
            .declare(side, "auto"));
    }

    Ok(Style::new().declare("position", "relative").declare(
        side,
        fraction_size_plus(fraction.as_str(), gutter, gutter.as_str()),
    ))
}
