//! # anofox-decompose
//!
//! Classical seasonal decomposition of time series by moving averages.
//!
//! Decomposes a regularly sampled 1-D or 2-D series into trend, seasonal,
//! and residual components under an additive or multiplicative model. The
//! trend is a centered (or causal) moving average, the seasonal component
//! the normalized per-phase average of the detrended series. A fast,
//! dependency-light baseline; loess-based methods should be preferred for
//! robust fitting.
//!
//! ```
//! use anofox_decompose::prelude::*;
//!
//! let values: Vec<f64> = (0..48)
//!     .map(|i| 10.0 + 0.1 * i as f64
//!         + 2.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
//!     .collect();
//! let series = Series::from_values(values);
//!
//! let result = SeasonalDecompose::new()
//!     .with_period(12)
//!     .decompose(&series)
//!     .unwrap();
//!
//! assert_eq!(result.nobs(), 48);
//! assert_eq!(result.seasonal().primary()[0], result.seasonal().primary()[12]);
//! ```

pub mod core;
pub mod decompose;
pub mod error;
pub mod filters;
pub mod frequency;

pub use error::{DecomposeError, Result};

pub mod prelude {
    pub use crate::core::{DecomposeResult, Series, SeriesBuilder};
    pub use crate::decompose::{
        seasonal_decompose, seasonal_mean, ExtrapolateTrend, Model, SeasonalDecompose,
    };
    pub use crate::error::{DecomposeError, Result};
}
