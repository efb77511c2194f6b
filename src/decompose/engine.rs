//! Seasonal decomposition by moving averages.

use std::str::FromStr;

use crate::core::{DecomposeResult, Series};
use crate::error::{DecomposeError, Result};
use crate::filters::convolution_filter;
use crate::frequency::freq_to_period;

use super::extrapolate::extrapolate_trend;
use super::seasonal::{normalized_phase_means, tile};

/// How trend and seasonal components combine with the residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    /// `Y[t] = T[t] + S[t] + e[t]`
    #[default]
    Additive,
    /// `Y[t] = T[t] * S[t] * e[t]`; requires strictly positive data.
    Multiplicative,
}

impl FromStr for Model {
    type Err = std::convert::Infallible;

    /// Abbreviations are accepted: anything starting with `m` is
    /// multiplicative, everything else additive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.to_lowercase().starts_with('m') {
            Ok(Self::Multiplicative)
        } else {
            Ok(Self::Additive)
        }
    }
}

/// Trend end-point extrapolation setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrapolateTrend {
    /// Leave the NaN padding from the convolution in place.
    #[default]
    Off,
    /// Extrapolate considering this many (+1) closest defined points.
    /// `Points(0)` behaves as `Off`.
    Points(usize),
    /// Extrapolate considering `period - 1` (+1) closest defined points,
    /// which guarantees NaN-free trend and residuals.
    Freq,
}

impl FromStr for ExtrapolateTrend {
    type Err = DecomposeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("freq") {
            return Ok(Self::Freq);
        }
        match s.parse::<usize>() {
            Ok(0) => Ok(Self::Off),
            Ok(n) => Ok(Self::Points(n)),
            Err(_) => Err(DecomposeError::InvalidParameter(format!(
                "extrapolate_trend must be a non-negative integer or 'freq', got '{}'",
                s
            ))),
        }
    }
}

/// Classical seasonal decomposition configuration.
///
/// This is a naive decomposition: the trend is a centered (or causal)
/// moving average, and the seasonal component is the per-phase average of
/// the detrended series, normalized and tiled over the full length. More
/// sophisticated methods such as STL should be preferred when available.
///
/// # Example
///
/// ```
/// use anofox_decompose::core::Series;
/// use anofox_decompose::decompose::SeasonalDecompose;
///
/// let values: Vec<f64> = (0..24)
///     .map(|i| 10.0 + (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
///     .collect();
/// let series = Series::from_values(values);
///
/// let result = SeasonalDecompose::new()
///     .with_period(12)
///     .decompose(&series)
///     .unwrap();
/// assert_eq!(result.nobs(), 24);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeasonalDecompose {
    model: Model,
    filt: Option<Vec<f64>>,
    period: Option<usize>,
    one_sided: bool,
    extrapolate: ExtrapolateTrend,
}

impl SeasonalDecompose {
    /// Create a decomposer with defaults: additive model, two-sided
    /// filtering, no explicit period (resolved from the series' frequency
    /// hint), no trend extrapolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decomposition model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Set the seasonal period (observations per cycle, at least 2).
    /// Overrides any frequency hint on the series.
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = Some(period);
        self
    }

    /// Supply custom filter coefficients instead of the period-derived
    /// moving-average weights.
    pub fn with_filter(mut self, filt: Vec<f64>) -> Self {
        self.filt = Some(filt);
        self
    }

    /// Use a causal filter over past values only. The trend is lagged and
    /// only the head of the series is NaN-padded.
    pub fn one_sided(mut self) -> Self {
        self.one_sided = true;
        self
    }

    /// Set the trend end-point extrapolation behavior.
    pub fn with_extrapolation(mut self, extrapolate: ExtrapolateTrend) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Decompose the series into trend, seasonal, and residual components.
    ///
    /// All validation happens before any filtering: the series must be free
    /// of NaN and infinite values, strictly positive for the multiplicative
    /// model, and at least two full cycles long.
    pub fn decompose(&self, x: &Series) -> Result<DecomposeResult> {
        let nobs = x.len();

        if x.has_missing_values() {
            return Err(DecomposeError::MissingData);
        }
        if self.model == Model::Multiplicative
            && x.columns().iter().any(|col| col.iter().any(|&v| v <= 0.0))
        {
            return Err(DecomposeError::Domain);
        }

        let period = self.resolve_period(x)?;
        if nobs < 2 * period {
            return Err(DecomposeError::InsufficientData {
                needed: 2 * period,
                got: nobs,
            });
        }

        let filt = match &self.filt {
            Some(f) => f.clone(),
            None => default_filter(period),
        };
        let sides = if self.one_sided { 1 } else { 2 };

        let mut trend: Vec<Vec<f64>> = x
            .columns()
            .iter()
            .map(|col| convolution_filter(col, &filt, sides))
            .collect::<Result<_>>()?;

        let npoints = match self.extrapolate {
            ExtrapolateTrend::Off | ExtrapolateTrend::Points(0) => 0,
            ExtrapolateTrend::Points(n) => n,
            ExtrapolateTrend::Freq => period - 1,
        };
        if npoints > 0 {
            trend = extrapolate_trend(&trend, npoints + 1);
        }

        let detrended: Vec<Vec<f64>> = x
            .columns()
            .iter()
            .zip(trend.iter())
            .map(|(col, t)| {
                col.iter()
                    .zip(t.iter())
                    .map(|(&v, &t)| match self.model {
                        Model::Additive => v - t,
                        Model::Multiplicative => v / t,
                    })
                    .collect()
            })
            .collect();

        let seasonal: Vec<Vec<f64>> = detrended
            .iter()
            .map(|col| {
                let pattern = normalized_phase_means(col, period, self.model);
                tile(&pattern, nobs)
            })
            .collect();

        let resid: Vec<Vec<f64>> = match self.model {
            Model::Additive => detrended
                .iter()
                .zip(seasonal.iter())
                .map(|(d, s)| d.iter().zip(s.iter()).map(|(&d, &s)| d - s).collect())
                .collect(),
            Model::Multiplicative => x
                .columns()
                .iter()
                .zip(seasonal.iter())
                .zip(trend.iter())
                .map(|((col, s), t)| {
                    col.iter()
                        .zip(s.iter())
                        .zip(t.iter())
                        .map(|((&v, &s), &t)| v / s / t)
                        .collect()
                })
                .collect(),
        };

        DecomposeResult::new(
            x.wrap_like(x.columns().to_vec(), None),
            x.wrap_like(seasonal, Some("seasonal")),
            x.wrap_like(trend, Some("trend")),
            x.wrap_like(resid, Some("resid")),
            None,
        )
    }

    fn resolve_period(&self, x: &Series) -> Result<usize> {
        let period = match self.period {
            Some(p) => p,
            None => match x.freq() {
                Some(freq) => freq_to_period(freq)?,
                None => {
                    return Err(DecomposeError::Configuration(
                        "no period given and the series carries no frequency hint".to_string(),
                    ));
                }
            },
        };
        if period < 2 {
            return Err(DecomposeError::InvalidParameter(format!(
                "period must be at least 2, got {}",
                period
            )));
        }
        Ok(period)
    }
}

/// Decompose with the default additive two-sided configuration and an
/// explicit period.
pub fn seasonal_decompose(x: &Series, period: usize) -> Result<DecomposeResult> {
    SeasonalDecompose::new().with_period(period).decompose(x)
}

/// The period-derived moving-average coefficients.
///
/// An even period gets a centered filter of length `period + 1` with half
/// weights at both boundary samples, so the window stays phase-unbiased.
/// An odd period gets uniform weights of length `period`.
fn default_filter(period: usize) -> Vec<f64> {
    let p = period as f64;
    if period % 2 == 0 {
        let mut filt = vec![1.0 / p; period + 1];
        filt[0] = 0.5 / p;
        filt[period] = 0.5 / p;
        filt
    } else {
        vec![1.0 / p; period]
    }
}
