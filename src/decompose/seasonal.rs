//! Period-wise averaging of a detrended series.

use super::engine::Model;

/// Return the mean of `x` at each phase of the cycle, ignoring NaN values.
///
/// Phase `i` averages the observations at positions `i, i + period,
/// i + 2*period, ...`. A phase whose every observation is NaN yields NaN.
///
/// # Example
///
/// ```
/// use anofox_decompose::decompose::seasonal_mean;
///
/// let x = vec![1.0, 10.0, 3.0, 20.0];
/// assert_eq!(seasonal_mean(&x, 2), vec![2.0, 15.0]);
/// ```
pub fn seasonal_mean(x: &[f64], period: usize) -> Vec<f64> {
    (0..period)
        .map(|phase| {
            let mut sum = 0.0;
            let mut count = 0usize;
            let mut i = phase;
            while i < x.len() {
                if !x[i].is_nan() {
                    sum += x[i];
                    count += 1;
                }
                i += period;
            }
            if count > 0 {
                sum / count as f64
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Phase averages normalized so the seasonal pattern has no net effect on
/// the series level: centered at zero for the additive model, at one for
/// the multiplicative model.
pub(crate) fn normalized_phase_means(detrended: &[f64], period: usize, model: Model) -> Vec<f64> {
    let mut means = seasonal_mean(detrended, period);
    let level = means.iter().sum::<f64>() / period as f64;
    match model {
        Model::Additive => {
            for m in &mut means {
                *m -= level;
            }
        }
        Model::Multiplicative => {
            for m in &mut means {
                *m /= level;
            }
        }
    }
    means
}

/// Repeat the phase pattern to `nobs` values, phase 0 aligned with index 0.
pub(crate) fn tile(pattern: &[f64], nobs: usize) -> Vec<f64> {
    pattern.iter().copied().cycle().take(nobs).collect()
}
