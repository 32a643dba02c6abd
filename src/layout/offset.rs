//! Offsets: push an element away from its neighbours with a margin.

use crate::config::Direction;
use crate::css::fraction::Fraction;
use crate::css::model::Style;
use crate::css::scalar::Length;
use crate::error::Result;
use crate::layout::calc::fraction_size_plus;

/// Margin an element by `value` of its container.
///
/// Positive values set the trailing margin (right, or bottom for columns),
/// negative values the leading one. `0` restores a plain gutter. Every value
/// is `!important` so it wins over the grid rules.
pub fn offset(value: &str, direction: Direction, gutter: &Length) -> Result<Style> {
    let fraction = Fraction::parse(value)?;
    let (leading, trailing) = match direction {
        Direction::Row => ("margin-left", "margin-right"),
        Direction::Column => ("margin-top", "margin-bottom"),
    };

    if fraction.is_none() {
        return Ok(Style::new()
            .declare_important(leading, "0")
            .declare_important(trailing, "0"));
    }

    if fraction.is_zero() {
        return Ok(Style::new()
            .declare_important(leading, "0")
            .declare_important(trailing, gutter.as_str()));
    }

    let raw = fraction.as_str();
    if fraction.is_negative() {
        let flipped = if gutter.is_zero() {
            raw.to_string()
        } else {
            format!("({raw} * -1)")
        };
        let value = fraction_size_plus(&flipped, gutter, gutter.as_str());
        Ok(Style::new().declare_important(leading, value))
    } else {
        let value = fraction_size_plus(raw, gutter, &format!("({gutter} * 2)"));
        Ok(Style::new().declare_important(trailing, value))
    }
}
