//! Waffle grids: blocks sized as a fraction of the container in both axes.

use crate::config::Config;
use crate::css::fraction::Fraction;
use crate::css::model::Style;
use crate::error::Result;
use crate::layout::calc::fraction_size;
use crate::layout::cycle::{Axis, CycleRules};

/// Create a block whose width and height are both `value` of its container.
///
/// Besides the column rules, the last `c` items (the final row) drop their
/// bottom gutter.
pub fn waffle(value: &str, config: &Config) -> Result<Style> {
    let fraction = Fraction::parse(value)?;
    let rules = CycleRules {
        axis: Axis::Both,
        gutter: &config.gutter,
        flex: config.flex,
        cycle: config.cycle.resolve(fraction.denominator()),
    };

    if fraction.is_none() {
        let base = Style::new().declare("width", "auto").declare("height", "auto");
        return Ok(rules.apply_reset(base));
    }

    let size = fraction_size(fraction.as_str(), &config.gutter);
    let mut base = Style::new();
    if config.flex {
        base = base.declare("flex", "0 0 auto");
    }
    base = base.declare("width", size.clone()).declare("height", size);
    Ok(rules.apply(base))
}
