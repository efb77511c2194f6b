//! Mapping from frequency labels to seasonal periods.
//!
//! A `Series` may carry an inferred frequency hint such as `"M"` (monthly)
//! or `"W-SUN"` (weekly anchored on Sunday). When no explicit period is
//! given, the decomposition resolves the hint through [`freq_to_period`].

use crate::error::{DecomposeError, Result};

/// Convert a frequency label to the number of observations per cycle.
///
/// Anchored labels (`"W-SUN"`, `"Q-DEC"`, ...) are reduced to their base
/// token before matching. Unmapped labels fail with a configuration error.
///
/// # Example
///
/// ```
/// use anofox_decompose::frequency::freq_to_period;
///
/// assert_eq!(freq_to_period("M").unwrap(), 12);
/// assert_eq!(freq_to_period("W-SUN").unwrap(), 52);
/// ```
pub fn freq_to_period(freq: &str) -> Result<usize> {
    let base = freq
        .split('-')
        .next()
        .unwrap_or(freq)
        .trim()
        .to_uppercase();

    match base.as_str() {
        "A" | "AS" | "Y" | "YS" | "YE" => Ok(1),
        "Q" | "QS" | "QE" => Ok(4),
        "M" | "MS" | "ME" => Ok(12),
        "W" => Ok(52),
        "D" => Ok(7),
        "B" => Ok(5),
        "H" => Ok(24),
        _ => Err(DecomposeError::Configuration(format!(
            "frequency '{}' has no known seasonal period",
            freq
        ))),
    }
}
