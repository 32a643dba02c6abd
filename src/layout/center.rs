//! Horizontally centered containers.

use crate::css::model::Style;
use crate::css::scalar::Length;
use crate::error::Result;
use crate::layout::utils::with_float_containment;

/// Center an element with the given `max_width`, optionally padding it on
/// both sides.
///
/// Float layouts get a clearfix; flexbox layouts become a wrapping flex row.
pub fn center(max_width: &str, padding: Option<&str>, flex: bool) -> Result<Style> {
    let max_width = Length::parse(max_width)?;
    let mut style = Style::new()
        .declare("max-width", max_width.as_str())
        .declare("margin-left", "auto")
        .declare("margin-right", "auto");

    if let Some(padding) = padding {
        let padding = Length::parse(padding)?;
        style = style
            .declare("padding-left", padding.as_str())
            .declare("padding-right", padding.as_str());
    }

    if flex {
        Ok(style.declare("display", "flex").declare("flex-flow", "row wrap"))
    } else {
        Ok(with_float_containment(style))
    }
}
