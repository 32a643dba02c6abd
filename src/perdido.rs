//! The `Perdido` facade: every generator behind one configured value.

use crate::config::{Config, ConfigOptions, Cycle, Direction};
use crate::css::model::Style;
use crate::error::Result;
use crate::layout::{
    align, center, column, flex_container, masonry, offset, row, shift, utils, waffle,
};

/// Layout helpers bound to a [`Config`].
///
/// Each method fills in the gutter, flex mode, cycle and direction from the
/// config. For a one-off override, derive a copy with the `with_*` methods:
///
/// ```
/// use perdido::Perdido;
///
/// let grid = Perdido::default();
/// let css = grid.with_gutter("0")?.column("1/2")?.to_css(".half");
/// assert!(css.starts_with(".half {\n  width: calc(99.999999% * 1/2);"));
/// # Ok::<(), perdido::PerdidoError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Perdido {
    config: Config,
}

impl Perdido {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build an instance from partial overrides; missing fields use the
    /// library defaults.
    pub fn create(options: &ConfigOptions) -> Result<Self> {
        Ok(Self::new(Config::default().apply(options)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn with_gutter(&self, gutter: &str) -> Result<Self> {
        Ok(Self::new(self.config.clone().with_gutter(gutter)?))
    }

    pub fn with_flex(&self, flex: bool) -> Self {
        Self::new(self.config.clone().with_flex(flex))
    }

    pub fn with_cycle(&self, cycle: Cycle) -> Self {
        Self::new(self.config.clone().with_cycle(cycle))
    }

    pub fn with_direction(&self, direction: Direction) -> Self {
        Self::new(self.config.clone().with_direction(direction))
    }

    /// Apply partial overrides on top of this instance's config.
    pub fn with_options(&self, options: &ConfigOptions) -> Result<Self> {
        Ok(Self::new(self.config.clone().apply(options)?))
    }

    /// See [`align::align`].
    pub fn align(&self, alignment: &str) -> Result<Style> {
        tracing::trace!("align {}", alignment);
        align::align(alignment, self.config.flex)
    }

    /// See [`center::center`].
    pub fn center(&self, max_width: &str, padding: Option<&str>) -> Result<Style> {
        tracing::trace!("center {}", max_width);
        center::center(max_width, padding, self.config.flex)
    }

    /// See [`column::column`].
    pub fn column(&self, value: &str) -> Result<Style> {
        tracing::trace!("column {}", value);
        column::column(value, &self.config)
    }

    /// See [`flex_container::flex_container`]. Uses the configured direction.
    pub fn flex_container(&self) -> Style {
        flex_container::flex_container(self.config.direction)
    }

    /// See [`masonry::masonry_column`].
    pub fn masonry_column(&self, value: &str) -> Result<Style> {
        tracing::trace!("masonry column {}", value);
        masonry::masonry_column(value, &self.config.gutter, self.config.flex)
    }

    /// See [`masonry::masonry_wrap`].
    pub fn masonry_wrap(&self) -> Style {
        masonry::masonry_wrap(self.config.flex, &self.config.gutter)
    }

    /// Source ordering. See [`shift::move_by`].
    pub fn move_by(&self, value: &str) -> Result<Style> {
        tracing::trace!("move {} along {}", value, self.config.direction);
        shift::move_by(value, self.config.direction, &self.config.gutter)
    }

    /// See [`offset::offset`].
    pub fn offset(&self, value: &str) -> Result<Style> {
        tracing::trace!("offset {} along {}", value, self.config.direction);
        offset::offset(value, self.config.direction, &self.config.gutter)
    }

    /// See [`row::row`].
    pub fn row(&self, value: &str) -> Result<Style> {
        tracing::trace!("row {}", value);
        row::row(value, &self.config)
    }

    /// See [`waffle::waffle`].
    pub fn waffle(&self, value: &str) -> Result<Style> {
        tracing::trace!("waffle {}", value);
        waffle::waffle(value, &self.config)
    }

    /// See [`utils::edit`].
    pub fn edit(&self) -> Style {
        utils::edit()
    }

    /// See [`utils::clear_fix`].
    pub fn clear_fix(&self) -> Style {
        utils::clear_fix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance() {
        let p = Perdido::default();
        assert_eq!(p.config(), &Config::default());
    }

    #[test]
    fn test_with_does_not_mutate() {
        let p = Perdido::default();
        let flexed = p.with_flex(true);
        assert!(!p.config().flex);
        assert!(flexed.config().flex);
    }

    #[test]
    fn test_with_options() {
        let options = ConfigOptions {
            cycle: Some(2),
            ..Default::default()
        };
        let p = Perdido::default().with_options(&options).unwrap();
        assert_eq!(p.config().cycle, Cycle::Every(2));
        assert_eq!(p.config().gutter.as_str(), "30px");
    }

    #[test]
    fn test_flex_container_uses_direction() {
        let p = Perdido::default().with_direction(Direction::Column);
        assert_eq!(p.flex_container().get("flex-flow"), Some("column nowrap"));
    }

    #[test]
    fn test_deterministic_output() {
        let p = Perdido::default().with_cycle(Cycle::Every(4));
        let first = p.waffle("3/8").unwrap().to_css("a");
        let second = p.waffle("3/8").unwrap().to_css("a");
        assert_eq!(first, second);
    }
}
