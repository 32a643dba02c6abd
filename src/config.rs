//! Immutable layout configuration threaded through every generator.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::css::scalar::Length;
use crate::error::{PerdidoError, Result};

/// Default gutter between grid items.
pub const DEFAULT_GUTTER: &str = "30px";

/// How many items make up one row (or column) before the pattern repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cycle {
    /// Repeat every `d` items, where `d` is the fraction's denominator.
    #[default]
    Denominator,
    /// Repeat every `n` items. `Every(0)` disables cycling.
    Every(u32),
}

impl Cycle {
    /// Map the integer encoding used by option objects: any negative count
    /// means "use the denominator".
    pub fn from_count(count: i64) -> Self {
        if count < 0 {
            Cycle::Denominator
        } else {
            Cycle::Every(u32::try_from(count).unwrap_or(u32::MAX))
        }
    }

    /// The effective repeat count for a fraction with the given denominator.
    /// `None` means no cycle rules are emitted.
    pub fn resolve(self, denominator: Option<u32>) -> Option<u32> {
        let count = match self {
            Cycle::Denominator => denominator?,
            Cycle::Every(n) => n,
        };
        (count > 0).then_some(count)
    }
}

/// Main axis for `move`, `offset` and flex containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

impl FromStr for Direction {
    type Err = PerdidoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "row" => Ok(Direction::Row),
            "column" => Ok(Direction::Column),
            other => Err(PerdidoError::unrecognized("direction", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Row => write!(f, "row"),
            Direction::Column => write!(f, "column"),
        }
    }
}

/// Library-wide defaults for gutter, flexbox mode, cycle and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gutter: Length,
    pub flex: bool,
    pub cycle: Cycle,
    pub direction: Direction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gutter: Length::px(30.0),
            flex: false,
            cycle: Cycle::Denominator,
            direction: Direction::Row,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the gutter, parsing it as a CSS length.
    pub fn with_gutter(self, gutter: &str) -> Result<Self> {
        Ok(Self {
            gutter: Length::parse(gutter)?,
            ..self
        })
    }

    pub fn with_flex(self, flex: bool) -> Self {
        Self { flex, ..self }
    }

    pub fn with_cycle(self, cycle: Cycle) -> Self {
        Self { cycle, ..self }
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// Apply partial overrides on top of this configuration.
    pub fn apply(self, options: &ConfigOptions) -> Result<Self> {
        let mut config = self;
        if let Some(gutter) = &options.gutter {
            config = config.with_gutter(gutter)?;
        }
        if let Some(flex) = options.flex {
            config = config.with_flex(flex);
        }
        if let Some(cycle) = options.cycle {
            config = config.with_cycle(Cycle::from_count(cycle));
        }
        if let Some(direction) = &options.offset_dir {
            config = config.with_direction(direction.parse()?);
        }
        Ok(config)
    }
}

/// Partial configuration, e.g. deserialized from `{"gutter": "60px"}`.
/// Missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOptions {
    pub gutter: Option<String>,
    pub flex: Option<bool>,
    pub cycle: Option<i64>,
    #[serde(alias = "direction")]
    pub offset_dir: Option<String>,
}
