//! Least-squares extrapolation of trend end-points.

/// Replace the NaN regions at both ends of a filtered trend with values
/// projected from least-squares lines fitted to the `npoints` closest
/// defined points.
///
/// Columns share the defined span: a row counts as defined only when no
/// column is NaN at that index. Each column gets its own line fit. The
/// input is left untouched; a new buffer is returned.
///
/// A fitting window collapsed to a single point degenerates to flat
/// extrapolation of that point's value; a trend with no fully defined row
/// is returned unchanged.
pub(crate) fn extrapolate_trend(trend: &[Vec<f64>], npoints: usize) -> Vec<Vec<f64>> {
    let mut out: Vec<Vec<f64>> = trend.to_vec();
    let nobs = out.first().map(|c| c.len()).unwrap_or(0);

    let row_defined = |i: usize| out.iter().all(|col| !col[i].is_nan());
    let front = match (0..nobs).find(|&i| row_defined(i)) {
        Some(i) => i,
        None => return out,
    };
    // Safe to unwrap: `front` exists, so a last defined row exists too.
    let back = (0..nobs).rev().find(|&i| row_defined(i)).unwrap();

    // Cap the fitting windows to the valid-data span.
    let front_last = (front + npoints).min(back);
    let back_first = front.max(back.saturating_sub(npoints));

    for col in &mut out {
        if front > 0 {
            if let Some((slope, intercept)) = fit_line(col, front, front_last) {
                for (i, v) in col.iter_mut().enumerate().take(front) {
                    *v = slope * i as f64 + intercept;
                }
            }
        }
        if back + 1 < nobs {
            if let Some((slope, intercept)) = fit_line(col, back_first, back) {
                for (i, v) in col.iter_mut().enumerate().skip(back + 1) {
                    *v = slope * i as f64 + intercept;
                }
            }
        }
    }

    out
}

/// Fit `y = slope * index + intercept` over the half-open window
/// `[start, end)`. Returns `None` for an empty window; a window without
/// index spread falls back to a flat line through the window mean.
fn fit_line(col: &[f64], start: usize, end: usize) -> Option<(f64, f64)> {
    let n = end.checked_sub(start)? as f64;
    if n == 0.0 {
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;
    for i in start..end {
        let x = i as f64;
        let y = col[i];
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom.abs() < 1e-12 {
        // Underdetermined slope: project the window mean flatly.
        return Some((0.0, sum_y / n));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    Some((slope, intercept))
}
