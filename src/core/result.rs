//! Decomposition result container.

use crate::core::series::Series;
use crate::error::{DecomposeError, Result};

/// The components of a seasonal decomposition.
///
/// Holds five series of identical shape, each aligned index-for-index with
/// the input: observed, trend, seasonal, residual, and weights (all ones
/// unless a robust procedure supplied them). Immutable after construction.
#[derive(Debug, Clone)]
pub struct DecomposeResult {
    observed: Series,
    seasonal: Series,
    trend: Series,
    resid: Series,
    weights: Series,
}

impl DecomposeResult {
    /// Assemble a result, validating that every component matches the
    /// observed series' shape. `weights` defaults to all ones carrying
    /// the observed series' metadata.
    pub fn new(
        observed: Series,
        seasonal: Series,
        trend: Series,
        resid: Series,
        weights: Option<Series>,
    ) -> Result<Self> {
        let weights = weights.unwrap_or_else(|| {
            let ones = vec![vec![1.0; observed.len()]; observed.ncols()];
            observed.wrap_like(ones, Some("weights"))
        });

        for component in [&seasonal, &trend, &resid, &weights] {
            if component.len() != observed.len() {
                return Err(DecomposeError::DimensionMismatch {
                    expected: observed.len(),
                    got: component.len(),
                });
            }
            if component.ncols() != observed.ncols() {
                return Err(DecomposeError::DimensionMismatch {
                    expected: observed.ncols(),
                    got: component.ncols(),
                });
            }
        }

        Ok(Self {
            observed,
            seasonal,
            trend,
            resid,
            weights,
        })
    }

    /// The observed data.
    pub fn observed(&self) -> &Series {
        &self.observed
    }

    /// The estimated seasonal component.
    pub fn seasonal(&self) -> &Series {
        &self.seasonal
    }

    /// The estimated trend component.
    pub fn trend(&self) -> &Series {
        &self.trend
    }

    /// The estimated residuals.
    pub fn resid(&self) -> &Series {
        &self.resid
    }

    /// The observation weights (all ones for the classical procedure).
    pub fn weights(&self) -> &Series {
        &self.weights
    }

    /// Number of observations.
    pub fn nobs(&self) -> usize {
        self.observed.len()
    }
}
