//! Core data structures for seasonal decomposition.

mod result;
mod series;

pub use result::DecomposeResult;
pub use series::{Series, SeriesBuilder};
