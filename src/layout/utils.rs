//! Small standalone helpers: the clearfix and an edit-mode outline.

use crate::css::model::Style;

/// `:before` / `:after` pseudo-elements that contain floated children.
pub(crate) fn with_float_containment(style: Style) -> Style {
    style
        .nest(
            "&:before",
            Style::new().declare("content", "''").declare("display", "table"),
        )
        .nest(
            "&:after",
            Style::new()
                .declare("content", "''")
                .declare("display", "table")
                .declare("clear", "both"),
        )
}

/// Clearfix: make an element wrap its floated children.
pub fn clear_fix() -> Style {
    with_float_containment(Style::new().declare("*zoom", "1"))
}

/// Tint every descendant except form controls, to visualize a grid
/// while editing it.
pub fn edit() -> Style {
    Style::new().nest(
        "& *:not(input):not(textarea):not(select)",
        Style::new().declare("background-color", "rgba(0, 0, 255, 0.1)"),
    )
}
