//! # perdido
//!
//! Fraction-based CSS grid and layout helpers. Each helper turns a small
//! argument (`"1/3"`, `"top-left"`, a gutter width) into a nested style
//! object for a CSS-in-JS engine: `calc()` widths, `nth-child` cycling
//! rules, flexbox properties.
//!
//! ## Core Systems
//!
//! - **[`css`]**: argument tokenizer, lengths, fractions, the [`Style`]
//!   model and its CSS / JSON rendering
//! - **[`layout`]**: the generators (column, row, waffle, masonry, align,
//!   center, move, offset, flex container, utilities)
//! - **[`config`]**: the immutable [`Config`] threaded through generators
//! - **[`perdido`]**: the [`Perdido`] facade
//!
//! ```
//! use perdido::Perdido;
//!
//! let third = Perdido::default().column("1/3")?;
//! assert_eq!(
//!     third.get("width"),
//!     Some("calc(99.99% * 1/3 - (30px - 30px * 1/3))")
//! );
//! # Ok::<(), perdido::PerdidoError>(())
//! ```

pub mod config;
pub mod css;
pub mod error;
pub mod layout;
pub mod perdido;

pub use config::{Config, ConfigOptions, Cycle, Direction};
pub use css::model::{Declaration, Style};
pub use error::PerdidoError;
pub use perdido::Perdido;
