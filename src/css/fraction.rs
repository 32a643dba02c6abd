//! Fraction expressions: `1/3`, `-2/5`, `0`, `60px`, or `none`.
//!
//! The numerator and denominator are never evaluated; the raw text is
//! spliced into `calc()` expressions. Only the denominator (for cycling) and
//! the numerator's sign are extracted.

use std::fmt;
use std::str::FromStr;

use crate::css::tokenizer::{tokenize, Token};
use crate::error::{PerdidoError, Result};

/// A parsed fraction argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Fraction {
    /// The `none` keyword: generators reset instead of sizing.
    None,
    /// A ratio or bare value.
    Ratio {
        raw: String,
        numerator: f64,
        denominator: Option<u32>,
    },
}

impl Fraction {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || PerdidoError::InvalidFraction(input.into());
        let tokens = tokenize(trimmed).ok_or_else(invalid)?;

        match tokens.as_slice() {
            [(Token::Ident, word)] if word == "none" => Ok(Fraction::None),
            [(Token::Number, n)] => Ok(Fraction::Ratio {
                raw: trimmed.to_string(),
                numerator: n.parse().map_err(|_| invalid())?,
                denominator: None,
            }),
            [(Token::Dimension, n)] => {
                let end = n
                    .find(|c: char| c.is_ascii_alphabetic() || c == '%')
                    .unwrap_or(n.len());
                Ok(Fraction::Ratio {
                    raw: trimmed.to_string(),
                    numerator: n[..end].parse().map_err(|_| invalid())?,
                    denominator: None,
                })
            }
            [(Token::Number, n), (Token::Slash, _), (Token::Number, d)] => {
                let denominator: u32 = d.parse().map_err(|_| invalid())?;
                if denominator == 0 {
                    return Err(invalid());
                }
                Ok(Fraction::Ratio {
                    raw: trimmed.to_string(),
                    numerator: n.parse().map_err(|_| invalid())?,
                    denominator: Some(denominator),
                })
            }
            _ => {
                tracing::debug!("rejecting fraction '{}'", input);
                Err(invalid())
            }
        }
    }

    /// Returns `true` for the `none` keyword.
    pub fn is_none(&self) -> bool {
        matches!(self, Fraction::None)
    }

    /// The text spliced into generated values. `none` for the keyword.
    pub fn as_str(&self) -> &str {
        match self {
            Fraction::None => "none",
            Fraction::Ratio { raw, .. } => raw,
        }
    }

    /// The right-hand side of `n/d`, if present.
    pub fn denominator(&self) -> Option<u32> {
        match self {
            Fraction::None => None,
            Fraction::Ratio { denominator, .. } => *denominator,
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Fraction::Ratio { numerator, .. } if *numerator < 0.0)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Fraction::Ratio { numerator, .. } if *numerator == 0.0)
    }
}

impl FromStr for Fraction {
    type Err = PerdidoError;

    fn from_str(s: &str) -> Result<Self> {
        Fraction::parse(s)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
