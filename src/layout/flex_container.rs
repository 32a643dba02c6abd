//! Flexbox containers.

use crate::config::Direction;
use crate::css::model::Style;

/// Turn an element into a flex container along `direction`. Rows wrap,
/// columns do not.
pub fn flex_container(direction: Direction) -> Style {
    let flow = match direction {
        Direction::Row => "row wrap",
        Direction::Column => "column nowrap",
    };
    Style::new().declare("display", "flex").declare("flex-flow", flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row() {
        assert_eq!(
            flex_container(Direction::Row).to_css("a"),
            "a {\n  display: flex;\n  flex-flow: row wrap;\n}"
        );
    }

    #[test]
    fn test_column() {
        assert_eq!(
            flex_container(Direction::Column).get("flex-flow"),
            Some("column nowrap")
        );
    }
}
