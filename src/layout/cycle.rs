//! Cycle-aware `nth-child` rules shared by the column and waffle grids.
//!
//! Every item floats left with a trailing gutter, the last item drops its
//! gutter, every `c`-th item closes a row (no gutter, floated right) and the
//! item after it clears the floats to start the next row. With flexbox the
//! float and clear properties are left out and only the margins remain.

use crate::css::model::Style;
use crate::css::scalar::Length;

/// Which gutters a grid item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Columns: a right gutter only.
    Horizontal,
    /// Waffle blocks: right and bottom gutters.
    Both,
}

impl Axis {
    fn has_bottom(self) -> bool {
        self == Axis::Both
    }
}

/// Parameters for one grid item's selector set.
#[derive(Debug, Clone, Copy)]
pub struct CycleRules<'a> {
    pub axis: Axis,
    pub gutter: &'a Length,
    pub flex: bool,
    /// Resolved repeat count; `None` emits no per-cycle rules.
    pub cycle: Option<u32>,
}

impl CycleRules<'_> {
    /// Attach the cycle rules to `base`.
    pub fn apply(&self, base: Style) -> Style {
        let mut style = base
            .nest("&:nth-child(n)", self.every_item())
            .nest("&:last-child", self.trailing_reset());

        if let Some(c) = self.cycle {
            style = style.nest(format!("&:nth-child({c}n)"), self.row_end());
            if !self.flex {
                style = style.nest(
                    format!("&:nth-child({c}n + 1)"),
                    Style::new().declare("clear", "left"),
                );
            }
            if self.axis.has_bottom() {
                style = style.nest(
                    format!("&:nth-last-child(-n + {c})"),
                    Style::new().declare("margin-bottom", "0"),
                );
            }
        }
        style
    }

    /// Attach the rules that undo a previous grid on the same element.
    pub fn apply_reset(&self, base: Style) -> Style {
        let c = self.cycle.unwrap_or(1);
        let selectors = [
            "&:last-child".to_string(),
            "&:nth-child(n)".to_string(),
            format!("&:nth-child({c}n + 1)"),
            format!("&:nth-child({c}n)"),
        ];
        selectors
            .into_iter()
            .fold(base, |style, selector| style.nest(selector, self.undo()))
    }

    fn every_item(&self) -> Style {
        let mut style = Style::new();
        if !self.flex {
            style = style.declare("float", "left");
        }
        if !self.gutter.is_zero() {
            style = style.declare("margin-right", self.gutter.as_str());
            if self.axis.has_bottom() {
                style = style.declare("margin-bottom", self.gutter.as_str());
            }
        }
        if !self.flex {
            style = style.declare("clear", "none");
        }
        style
    }

    fn trailing_reset(&self) -> Style {
        let style = Style::new().declare("margin-right", "0");
        if self.axis.has_bottom() {
            style.declare("margin-bottom", "0")
        } else {
            style
        }
    }

    fn row_end(&self) -> Style {
        match (self.axis, self.flex) {
            (_, true) => Style::new().declare("margin-right", "0"),
            (Axis::Horizontal, false) => Style::new()
                .declare("float", "right")
                .declare("margin-right", "0"),
            (Axis::Both, false) => Style::new()
                .declare("margin-right", "0")
                .declare("float", "right"),
        }
    }

    fn undo(&self) -> Style {
        let mut style = Style::new();
        if !self.flex {
            style = style.declare("float", "none").declare("clear", "none");
        }
        style = style.declare("margin-right", "0");
        if self.axis.has_bottom() {
            style = style.declare("margin-bottom", "0");
        }
        style = style.declare("width", "auto");
        if self.axis.has_bottom() {
            style = style.declare("height", "auto");
        }
        style
    }
}
