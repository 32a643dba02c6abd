//! Rows sized as a fraction of the containing element's height.

use crate::config::Config;
use crate::css::fraction::Fraction;
use crate::css::model::Style;
use crate::error::Result;
use crate::layout::calc::fraction_size;

/// Create a full-width row spanning `value` of its container's height.
///
/// Rows stack vertically, so there is no cycling: every row carries a bottom
/// gutter and the last one drops it.
pub fn row(value: &str, config: &Config) -> Result<Style> {
    let fraction = Fraction::parse(value)?;

    if fraction.is_none() {
        return Ok(Style::new()
            .declare("height", "auto")
            .declare("margin-bottom", "0"));
    }

    let mut base = Style::new().declare("width", "100%");
    if config.flex {
        base = base.declare("flex", "0 0 auto");
    }
    let base = base
        .declare("height", fraction_size(fraction.as_str(), &config.gutter))
        .declare("margin-bottom", config.gutter.as_str());

    Ok(base.nest("&:last-child", Style::new().declare("margin-bottom", "0")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_rows() {
        assert_eq!(
            row("1/3", &Config::default()).unwrap().to_css("a"),
            "a {\n  width: 100%;\n  height: calc(99.99% * 1/3 - (30px - 30px * 1/3));\n  margin-bottom: 30px;\n}\na:last-child {\n  margin-bottom: 0;\n}"
        );
    }

    #[test]
    fn test_zero_gutter_keeps_explicit_margin() {
        let config = Config::default().with_gutter("0").unwrap();
        let style = row("2/5", &config).unwrap();
        assert_eq!(style.get("height"), Some("calc(99.999999% * 2/5)"));
        assert_eq!(style.get("margin-bottom"), Some("0"));
    }

    #[test]
    fn test_flex_follows_width() {
        let config = Config::default().with_flex(true);
        let style = row("1/2", &config).unwrap();
        let props: Vec<_> = style
            .declarations()
            .iter()
            .map(|d| d.property.as_str())
            .collect();
        assert_eq!(props, vec!["width", "flex", "height", "margin-bottom"]);
    }

    #[test]
    fn test_none() {
        let style = row("none", &Config::default()).unwrap();
        assert_eq!(style.get("height"), Some("auto"));
        assert_eq!(style.rules().count(), 0);
    }
}
