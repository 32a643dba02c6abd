//! Serialization of a [`Style`] to CSS text and to a CSS-in-JS object.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::css::model::Style;

impl Style {
    /// Render this style as CSS text, attached to `selector`.
    ///
    /// Each rule becomes one block of the form `sel {\n  prop: value;\n}`.
    /// Blocks are joined with a newline, the element's own block first and
    /// nested rules after it in insertion order. `&` in a nested selector is
    /// replaced by the parent selector.
    pub fn to_css(&self, selector: &str) -> String {
        let mut blocks = Vec::new();
        write_blocks(self, selector, true, &mut blocks);
        blocks.join("\n")
    }

    /// The CSS-in-JS object form, with keys in insertion order.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

fn write_blocks(style: &Style, selector: &str, is_root: bool, blocks: &mut Vec<String>) {
    // Nested rules without declarations only exist to carry deeper rules.
    if is_root || !style.declarations().is_empty() {
        let mut block = format!("{selector} {{\n");
        for declaration in style.declarations() {
            block.push_str(&format!(
                "  {}: {};\n",
                declaration.property,
                declaration.css_value()
            ));
        }
        block.push('}');
        blocks.push(block);
    }

    for (nested, rule) in style.rules() {
        write_blocks(rule, &resolve_selector(nested, selector), false, blocks);
    }
}

/// Substitute the parent selector for `&`; selectors without `&` are
/// treated as descendants.
fn resolve_selector(nested: &str, parent: &str) -> String {
    if nested.contains('&') {
        nested.replace('&', parent)
    } else {
        format!("{parent} {nested}")
    }
}

/// Serializes as a nested object: property keys first, then nested
/// selectors, both in insertion order.
impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.declarations().len() + self.rules().count();
        let mut map = serializer.serialize_map(Some(len))?;
        for declaration in self.declarations() {
            map.serialize_entry(&declaration.property, &declaration.css_value())?;
        }
        for (selector, rule) in self.rules() {
            map.serialize_entry(selector, rule)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clearfixed() -> Style {
        Style::new()
            .declare("*zoom", "1")
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

    #[test]
    fn test_empty_root_block() {
        assert_eq!(Style::new().to_css("a"), "a {\n}");
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(
            clearfixed().to_css("a"),
            [
                "a {\n  *zoom: 1;\n}",
                "a:before {\n  content: '';\n  display: table;\n}",
                "a:after {\n  content: '';\n  display: table;\n  clear: both;\n}",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_child_combinator_and_important() {
        let s = Style::new()
            .declare_important("margin-left", "0")
            .nest("& > *", Style::new().declare("position", "static"));
        assert_eq!(
            s.to_css(".grid"),
            ".grid {\n  margin-left: 0 !important;\n}\n.grid > * {\n  position: static;\n}"
        );
    }

    #[test]
    fn test_selector_without_ampersand_is_descendant() {
        assert_eq!(resolve_selector("span", "a"), "a span");
        assert_eq!(resolve_selector("&:hover", "a"), "a:hover");
    }

    #[test]
    fn test_deeply_nested_rule() {
        let s = Style::new().nest(
            "&:hover",
            Style::new().nest("& > *", Style::new().declare("color", "red")),
        );
        assert_eq!(s.to_css("a"), "a {\n}\na:hover > * {\n  color: red;\n}");
    }

    #[test]
    fn test_json_object() {
        let json = serde_json::to_string(&clearfixed()).unwrap();
        assert_eq!(
            json,
            r#"{"*zoom":"1","&:before":{"content":"''","display":"table"},"&:after":{"content":"''","display":"table","clear":"both"}}"#
        );
    }

    #[test]
    fn test_to_json_keeps_order() {
        let value = clearfixed().to_json().unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["*zoom", "&:before", "&:after"]);
        assert_eq!(value["&:after"]["clear"], "both");
    }

    #[test]
    fn test_json_important_value() {
        let s = Style::new().declare_important("margin-right", "30px");
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value, serde_json::json!({ "margin-right": "30px !important" }));
    }
}
