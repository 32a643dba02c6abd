//! logos-based tokenizer for layout arguments.
//!
//! Layout helpers accept small scalar strings: fractions (`1/3`, `-2/5`),
//! lengths (`30px`, `2.5em`, `0`) and keywords (`none`, `top-left`).
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `30px` as Dimension beats `30` as Number)
//! 2. For equal length matches, earlier-defined variants win

use logos::Logos;

/// Token produced by the argument lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Dimension: number with unit suffix like `30px`, `50%`, `1.5rem`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)([a-zA-Z]+|%)")]
    Dimension,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Keyword: `none`, `auto`, `top-left`, `row`, etc.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `/` between numerator and denominator.
    #[token("/")]
    Slash,
}

/// Tokenize an argument string into `(Token, text)` pairs.
///
/// Returns `None` if any part of the input fails to lex.
pub fn tokenize(input: &str) -> Option<Vec<(Token, String)>> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}
