//! Linear filters consumed by the decomposition.

mod convolution;

pub use convolution::convolution_filter;
