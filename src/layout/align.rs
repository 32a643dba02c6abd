//! Alignment of nested elements, by absolute positioning or flexbox.

use std::str::FromStr;

use crate::css::model::Style;
use crate::error::{PerdidoError, Result};

/// Where children are placed inside their parent.
///
/// Edge names (`top`, `left`, ...) are shorthands for the middle of that
/// edge, and `center` is `middle-center`; they parse to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Reset,
    Horizontal,
    Vertical,
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl FromStr for Alignment {
    type Err = PerdidoError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim() {
            "reset" => Alignment::Reset,
            "horizontal" => Alignment::Horizontal,
            "vertical" => Alignment::Vertical,
            "top-left" => Alignment::TopLeft,
            "top-center" | "top" => Alignment::TopCenter,
            "top-right" => Alignment::TopRight,
            "middle-left" | "left" => Alignment::MiddleLeft,
            "middle-center" | "center" => Alignment::MiddleCenter,
            "middle-right" | "right" => Alignment::MiddleRight,
            "bottom-left" => Alignment::BottomLeft,
            "bottom-center" | "bottom" => Alignment::BottomCenter,
            "bottom-right" => Alignment::BottomRight,
            other => return Err(PerdidoError::unrecognized("align", other)),
        })
    }
}

/// Offsets and translation for one absolutely positioned child.
struct Placement {
    top: &'static str,
    right: &'static str,
    bottom: &'static str,
    left: &'static str,
    translate: (&'static str, &'static str),
}

const fn place(
    top: &'static str,
    right: &'static str,
    bottom: &'static str,
    left: &'static str,
    translate: (&'static str, &'static str),
) -> Placement {
    Placement {
        top,
        right,
        bottom,
        left,
        translate,
    }
}

impl Alignment {
    fn placement(self) -> Placement {
        const A: &str = "auto";
        const MID: &str = "50%";
        match self {
            Alignment::Reset => place(A, A, A, A, ("0", "0")),
            Alignment::Horizontal => place(A, A, A, MID, ("-50%", "0")),
            Alignment::Vertical => place(MID, A, A, A, ("0", "-50%")),
            Alignment::TopLeft => place("0", A, A, "0", ("0", "0")),
            Alignment::TopCenter => place("0", A, A, MID, ("-50%", "0")),
            Alignment::TopRight => place("0", "0", A, A, ("0", "0")),
            Alignment::MiddleLeft => place(MID, A, A, "0", ("0", "-50%")),
            Alignment::MiddleCenter => place(MID, A, A, MID, ("-50%", "-50%")),
            Alignment::MiddleRight => place(MID, "0", A, A, ("0", "-50%")),
            Alignment::BottomLeft => place(A, A, "0", "0", ("0", "0")),
            Alignment::BottomCenter => place(A, A, "0", MID, ("-50%", "0")),
            Alignment::BottomRight => place(A, "0", "0", A, ("0", "0")),
        }
    }

    /// `(justify-content, align-items)` for the flexbox form.
    fn flex_placement(self) -> (&'static str, &'static str) {
        match self {
            Alignment::Reset => ("inherit", "inherit"),
            Alignment::Horizontal => ("center", "inherit"),
            Alignment::Vertical => ("inherit", "center"),
            Alignment::TopLeft => ("flex-start", "flex-start"),
            Alignment::TopCenter => ("center", "flex-start"),
            Alignment::TopRight => ("flex-end", "flex-start"),
            Alignment::MiddleLeft => ("flex-start", "center"),
            Alignment::MiddleCenter => ("center", "center"),
            Alignment::MiddleRight => ("flex-end", "center"),
            Alignment::BottomLeft => ("flex-start", "flex-end"),
            Alignment::BottomCenter => ("center", "flex-end"),
            Alignment::BottomRight => ("flex-end", "flex-end"),
        }
    }

    /// Build the style for this alignment.
    pub fn to_style(self, flex: bool) -> Style {
        let reset = self == Alignment::Reset;

        if flex {
            let (justify, align) = self.flex_placement();
            return Style::new()
                .declare("display", if reset { "initial" } else { "flex" })
                .nest(
                    "& > *",
                    Style::new()
                        .declare("justify-content", justify)
                        .declare("align-items", align),
                );
        }

        let p = self.placement();
        let (x, y) = p.translate;
        Style::new()
            .declare("position", if reset { "static" } else { "relative" })
            .nest(
                "& > *",
                Style::new()
                    .declare("position", if reset { "static" } else { "absolute" })
                    .declare("top", p.top)
                    .declare("right", p.right)
                    .declare("bottom", p.bottom)
                    .declare("left", p.left)
                    .declare("transform", format!("translate({x}, {y})")),
            )
    }
}

/// Align the children of an element according to `alignment`.
pub fn align(alignment: &str, flex: bool) -> Result<Style> {
    Ok(alignment.parse::<Alignment>()?.to_style(flex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reset() {
        assert_eq!(
            align("reset", false).unwrap().to_css("a"),
            "a {\n  position: static;\n}\na > * {\n  position: static;\n  top: auto;\n  right: auto;\n  bottom: auto;\n  left: auto;\n  transform: translate(0, 0);\n}"
        );
    }

    #[test]
    fn test_center_is_middle_center() {
        assert_eq!(align("center", false), align("middle-center", false));
        assert_eq!(align("center", true), align("middle-center", true));
    }

    #[test]
    fn test_edge_shorthands() {
        for (short, long) in [
            ("top", "top-center"),
            ("left", "middle-left"),
            ("right", "middle-right"),
            ("bottom", "bottom-center"),
        ] {
            assert_eq!(
                short.parse::<Alignment>().unwrap(),
                long.parse::<Alignment>().unwrap()
            );
        }
    }

    #[test]
    fn test_bottom_right_offsets() {
        let style = align("bottom-right", false).unwrap();
        let child = style.rule("& > *").unwrap();
        assert_eq!(child.get("right"), Some("0"));
        assert_eq!(child.get("bottom"), Some("0"));
        assert_eq!(child.get("top"), Some("auto"));
        assert_eq!(child.get("transform"), Some("translate(0, 0)"));
    }

    #[test]
    fn test_flex_reset() {
        let style = align("reset", true).unwrap();
        assert_eq!(style.get("display"), Some("initial"));
        let child = style.rule("& > *").unwrap();
        assert_eq!(child.get("justify-content"), Some("inherit"));
        assert_eq!(child.get("align-items"), Some("inherit"));
    }

    #[test]
    fn test_flex_has_no_positioning() {
        let style = align("top-right", true).unwrap();
        assert!(!style.mentions("position"));
        let child = style.rule("& > *").unwrap();
        assert_eq!(child.get("justify-content"), Some("flex-end"));
        assert_eq!(child.get("align-items"), Some("flex-start"));
    }

    #[test]
    fn test_unknown_keyword() {
        assert_eq!(
            align("sideways", false),
            Err(PerdidoError::UnrecognizedKeyword {
                operation: "align",
                keyword: "sideways".into(),
            })
        );
    }
}
