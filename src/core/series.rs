//! Series data structure for 1-D and 2-D observation data.

use crate::error::{DecomposeError, Result};

/// A regularly sampled series of observations.
///
/// Values are stored column-major: `values[column][observation]`. A series
/// built from a plain vector is univariate and remembers that fact, so
/// decomposition results can be squeezed back to one dimension. Optional
/// metadata (a name, per-column labels, a frequency hint) is carried along
/// unchanged and restored on every derived series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<Vec<f64>>,
    name: Option<String>,
    labels: Vec<String>,
    freq: Option<String>,
    univariate: bool,
}

/// Builder for constructing a [`Series`] with metadata.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    values: Vec<Vec<f64>>,
    name: Option<String>,
    labels: Vec<String>,
    freq: Option<String>,
    univariate: bool,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set univariate values.
    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = vec![values];
        self.univariate = true;
        self
    }

    /// Set multivariate values, one inner vector per column.
    pub fn columns(mut self, columns: Vec<Vec<f64>>) -> Self {
        self.values = columns;
        self.univariate = false;
        self
    }

    /// Name the series (univariate data).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set per-column labels (multivariate data).
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Attach an inferred frequency hint, e.g. `"M"` or `"W-SUN"`.
    pub fn freq(mut self, freq: impl Into<String>) -> Self {
        self.freq = Some(freq.into());
        self
    }

    pub fn build(self) -> Result<Series> {
        Series::validated(
            self.values,
            self.name,
            self.labels,
            self.freq,
            self.univariate,
        )
    }
}

impl Series {
    fn validated(
        values: Vec<Vec<f64>>,
        name: Option<String>,
        labels: Vec<String>,
        freq: Option<String>,
        univariate: bool,
    ) -> Result<Self> {
        if values.is_empty() {
            return Err(DecomposeError::InvalidParameter(
                "series must have at least one column".to_string(),
            ));
        }

        let nobs = values[0].len();
        for column in &values[1..] {
            if column.len() != nobs {
                return Err(DecomposeError::DimensionMismatch {
                    expected: nobs,
                    got: column.len(),
                });
            }
        }

        if !labels.is_empty() && labels.len() != values.len() {
            return Err(DecomposeError::DimensionMismatch {
                expected: values.len(),
                got: labels.len(),
            });
        }

        Ok(Self {
            values,
            name,
            labels,
            freq,
            univariate,
        })
    }

    /// Create a univariate series from a plain vector.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values: vec![values],
            name: None,
            labels: vec![],
            freq: None,
            univariate: true,
        }
    }

    /// Create a multivariate series, one inner vector per column.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        Self::validated(columns, None, vec![], None, false)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values[0].len()
    }

    /// Check if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values[0].is_empty()
    }

    /// Get the number of columns (1 for univariate data).
    pub fn ncols(&self) -> usize {
        self.values.len()
    }

    /// Whether the series was built from 1-D data.
    pub fn is_univariate(&self) -> bool {
        self.univariate
    }

    /// Get the values of a specific column.
    pub fn column(&self, index: usize) -> Result<&[f64]> {
        self.values
            .get(index)
            .map(|v| v.as_slice())
            .ok_or(DecomposeError::IndexOutOfBounds {
                index,
                size: self.values.len(),
            })
    }

    /// Get all values organized by column.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Get the primary (first column) values.
    pub fn primary(&self) -> &[f64] {
        &self.values[0]
    }

    /// Get the series name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the column labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the frequency hint, if any.
    pub fn freq(&self) -> Option<&str> {
        self.freq.as_deref()
    }

    /// Check whether any value is NaN or infinite.
    pub fn has_missing_values(&self) -> bool {
        self.values
            .iter()
            .any(|col| col.iter().any(|v| !v.is_finite()))
    }

    /// Build a new series carrying this series' metadata over the given
    /// column data. `component` names the result when the original data
    /// was univariate and therefore unlabeled per column; `None` keeps the
    /// original name (used for the observed series).
    pub(crate) fn wrap_like(&self, values: Vec<Vec<f64>>, component: Option<&str>) -> Series {
        debug_assert_eq!(values.len(), self.values.len());
        let name = match component {
            Some(c) if self.univariate => Some(c.to_string()),
            _ => self.name.clone(),
        };
        Series {
            values,
            name,
            labels: self.labels.clone(),
            freq: self.freq.clone(),
            univariate: self.univariate,
        }
    }
}
