//! CSS primitives: argument tokenizer, lengths, fractions, style model, rendering.

pub mod tokenizer;
pub mod scalar;
pub mod fraction;
pub mod model;
pub mod render;
