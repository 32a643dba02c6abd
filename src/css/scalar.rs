//! CSS lengths: gutters, widths and padding such as `30px`, `2.5em` or `0`.

use std::fmt;
use std::str::FromStr;

use crate::css::tokenizer::{tokenize, Token};
use crate::error::{PerdidoError, Result};

/// Units accepted on a length. Matched case-insensitively.
const UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vw", "vh", "vmin", "vmax", "ch", "ex", "pt", "pc", "cm", "mm", "in",
    "fr",
];

/// A CSS length as supplied by the caller.
///
/// The input text is kept so it can be spliced verbatim into generated
/// values; the numeric part and unit are only used when a derived length
/// (half a gutter, a negated gutter) has to be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    raw: String,
    value: f64,
    unit: String,
}

impl Length {
    /// Parse a length: a bare number (`0`, `10`) or a dimension (`30px`, `50%`).
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let tokens = tokenize(trimmed).ok_or_else(|| PerdidoError::InvalidLength(input.into()))?;

        match tokens.as_slice() {
            [(Token::Number, text)] => Ok(Self {
                raw: text.clone(),
                value: parse_number(text, input)?,
                unit: String::new(),
            }),
            [(Token::Dimension, text)] => {
                let split = text
                    .find(|c: char| c.is_ascii_alphabetic() || c == '%')
                    .ok_or_else(|| PerdidoError::InvalidLength(input.into()))?;
                let (number, unit) = text.split_at(split);
                if !UNITS.iter().any(|known| known.eq_ignore_ascii_case(unit)) {
                    tracing::debug!("rejecting length '{}': unknown unit '{}'", input, unit);
                    return Err(PerdidoError::InvalidLength(input.into()));
                }
                Ok(Self {
                    raw: text.clone(),
                    value: parse_number(number, input)?,
                    unit: unit.to_string(),
                })
            }
            _ => {
                tracing::debug!("rejecting length '{}'", input);
                Err(PerdidoError::InvalidLength(input.into()))
            }
        }
    }

    /// The unitless zero length, `0`.
    pub fn zero() -> Self {
        Self {
            raw: "0".into(),
            value: 0.0,
            unit: String::new(),
        }
    }

    /// A length in pixels.
    pub(crate) fn px(value: f64) -> Self {
        Self::computed(value, "px")
    }

    /// Returns `true` for the literal `0`, which switches generators into
    /// their gutterless formulas. `0px` is an ordinary length.
    pub fn is_zero(&self) -> bool {
        self.raw == "0"
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The text this length renders as.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Half of this length, in the same unit.
    pub fn half(&self) -> Self {
        Self::computed(self.value / 2.0, &self.unit)
    }

    /// This length with its sign flipped.
    pub fn negate(&self) -> Self {
        Self::computed(-self.value, &self.unit)
    }

    fn computed(value: f64, unit: &str) -> Self {
        // A zero result is always written unitless.
        let raw = if value == 0.0 {
            "0".to_string()
        } else {
            format!("{value}{unit}")
        };
        Self {
            raw,
            value,
            unit: unit.to_string(),
        }
    }
}

fn parse_number(text: &str, input: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| PerdidoError::InvalidLength(input.into()))
}

impl FromStr for Length {
    type Err = PerdidoError;

    fn from_str(s: &str) -> Result<Self> {
        Length::parse(s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
