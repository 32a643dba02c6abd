//! Layout generators: grids, alignment, offsets and their shared math.

pub mod align;
pub mod calc;
pub mod center;
pub mod column;
pub mod cycle;
pub mod flex_container;
pub mod masonry;
pub mod offset;
pub mod row;
pub mod shift;
pub mod utils;
pub mod waffle;
