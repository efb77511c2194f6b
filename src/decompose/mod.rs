//! Classical seasonal decomposition by moving averages.
//!
//! The seasonal component is first removed by applying a convolution
//! filter to the data; the per-phase average of the smoothed series is the
//! returned seasonal component.

mod engine;
mod extrapolate;
mod seasonal;

pub use engine::{seasonal_decompose, ExtrapolateTrend, Model, SeasonalDecompose};
pub use seasonal::seasonal_mean;
