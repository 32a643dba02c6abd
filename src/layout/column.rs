//! Columns sized as a fraction of the containing element's width.

use crate::config::Config;
use crate::css::fraction::Fraction;
use crate::css::model::Style;
use crate::error::Result;
use crate::layout::calc::fraction_size;
use crate::layout::cycle::{Axis, CycleRules};

/// Create a column spanning `value` (e.g. `"1/3"`) of its container.
///
/// Uses the config's gutter, flex mode and cycle. The keyword `none`
/// resets a previously applied column.
pub fn column(value: &str, config: &Config) -> Result<Style> {
    let fraction = Fraction::parse(value)?;
    let rules = CycleRules {
        axis: Axis::Horizontal,
        gutter: &config.gutter,
        flex: config.flex,
        cycle: config.cycle.resolve(fraction.denominator()),
    };

    if fraction.is_none() {
        return Ok(rules.apply_reset(Style::new().declare("width", "auto")));
    }

    let mut base = Style::new().declare("width", fraction_size(fraction.as_str(), &config.gutter));
    if config.flex {
        base = base.declare("flex", "0 0 auto");
    }
    Ok(rules.apply(base))
}
