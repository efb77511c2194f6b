//! Linear filtering of a series by convolution with fixed weights.

use crate::error::{DecomposeError, Result};

/// Apply a fixed-weight linear filter to a series.
///
/// With filter length `L` over `n` observations:
///
/// - `sides == 1`: causal filter over past values only,
///   `y[i] = filt[0]*x[i] + filt[1]*x[i-1] + ... + filt[L-1]*x[i-L+1]`,
///   defined for `i >= L - 1`. The first `L - 1` entries are NaN.
/// - `sides == 2`: centered filter,
///   `y[i] = filt[0]*x[i + L/2] + ... + filt[L-1]*x[i + L/2 - L + 1]`,
///   defined for `ceil(L/2) - 1 <= i < n - L/2`. The head and tail are
///   padded with NaN (`ceil(L/2) - 1` and `L/2` entries respectively).
///
/// The kernel is applied reversed, as in a true convolution; this is
/// invisible for symmetric weights but matters for custom filters. The
/// output always has the input's length.
pub fn convolution_filter(x: &[f64], filt: &[f64], sides: usize) -> Result<Vec<f64>> {
    let n = x.len();
    let len = filt.len();

    if len == 0 {
        return Err(DecomposeError::InvalidParameter(
            "filter must have at least one coefficient".to_string(),
        ));
    }
    if len > n {
        return Err(DecomposeError::InvalidParameter(format!(
            "filter length {} exceeds series length {}",
            len, n
        )));
    }

    let (head, tail, offset) = match sides {
        1 => (len - 1, 0, 0),
        2 => (len.div_ceil(2) - 1, len / 2, len / 2),
        _ => {
            return Err(DecomposeError::InvalidParameter(format!(
                "sides must be 1 or 2, got {}",
                sides
            )));
        }
    };

    let mut out = vec![f64::NAN; n];
    for i in head..(n - tail) {
        // Ascending k keeps summation order deterministic.
        let mut acc = 0.0;
        for (k, &w) in filt.iter().enumerate() {
            acc += w * x[i + offset - k];
        }
        out[i] = acc;
    }

    Ok(out)
}
