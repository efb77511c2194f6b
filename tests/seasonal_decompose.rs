//! End-to-end tests for classical seasonal decomposition.
//!
//! These cover the decomposition invariants that should hold for all valid
//! inputs, plus the documented validation failures.

use anofox_decompose::prelude::*;
use approx::assert_relative_eq;
use proptest::prelude::*;
use std::f64::consts::PI;

/// 24 monthly observations: level 10, sine seasonality of period 12,
/// linear trend of 0.1 per step, no noise.
fn monthly_series() -> Series {
    let values: Vec<f64> = (0..24)
        .map(|i| 10.0 + 2.0 * (2.0 * PI * i as f64 / 12.0).sin() + 0.1 * i as f64)
        .collect();
    Series::from_values(values)
}

#[test]
fn noiseless_monthly_series_decomposes_exactly() {
    let series = monthly_series();
    let result = seasonal_decompose(&series, 12).unwrap();

    let trend = result.trend().primary();
    let seasonal = result.seasonal().primary();
    let resid = result.resid().primary();

    // Two-sided filter of length 13 leaves exactly indices 6..=17 defined.
    for i in 0..24 {
        assert_eq!(trend[i].is_nan(), !(6..18).contains(&i), "index {}", i);
        assert_eq!(resid[i].is_nan(), !(6..18).contains(&i), "index {}", i);
    }

    // The half-weight boundary filter removes the sinusoid exactly, so the
    // trend is the linear part of the series.
    for i in 6..18 {
        assert_relative_eq!(trend[i], 10.0 + 0.1 * i as f64, epsilon = 1e-8);
    }

    // The seasonal pattern recovers the sinusoid and the residual is zero.
    for i in 0..24 {
        assert_relative_eq!(
            seasonal[i],
            2.0 * (2.0 * PI * i as f64 / 12.0).sin(),
            epsilon = 1e-8
        );
    }
    for i in 6..18 {
        assert_relative_eq!(resid[i], 0.0, epsilon = 1e-8);
    }
}

#[test]
fn seasonal_component_is_exactly_periodic() {
    let series = monthly_series();
    let result = seasonal_decompose(&series, 12).unwrap();

    let seasonal = result.seasonal().primary();
    for i in 0..12 {
        // Built by tiling, so equality is exact.
        assert_eq!(seasonal[i], seasonal[i + 12]);
    }
}

#[test]
fn additive_seasonal_pattern_averages_to_zero() {
    let series = monthly_series();
    let result = seasonal_decompose(&series, 12).unwrap();

    let mean: f64 = result.seasonal().primary()[..12].iter().sum::<f64>() / 12.0;
    assert_relative_eq!(mean, 0.0, epsilon = 1e-10);
}

#[test]
fn multiplicative_seasonal_pattern_averages_to_one() {
    let series = monthly_series();
    let result = SeasonalDecompose::new()
        .with_model(Model::Multiplicative)
        .with_period(12)
        .decompose(&series)
        .unwrap();

    let mean: f64 = result.seasonal().primary()[..12].iter().sum::<f64>() / 12.0;
    assert_relative_eq!(mean, 1.0, epsilon = 1e-10);
}

#[test]
fn extrapolation_fills_the_filter_padding() {
    let series = monthly_series();

    let plain = seasonal_decompose(&series, 12).unwrap();
    assert!(plain.trend().primary()[..6].iter().all(|v| v.is_nan()));
    assert!(plain.trend().primary()[18..].iter().all(|v| v.is_nan()));

    let filled = SeasonalDecompose::new()
        .with_period(12)
        .with_extrapolation(ExtrapolateTrend::Freq)
        .decompose(&series)
        .unwrap();
    assert!(filled.trend().primary().iter().all(|v| !v.is_nan()));
    assert!(filled.resid().primary().iter().all(|v| !v.is_nan()));

    // Linear trend in the data means the extrapolated ends continue it.
    for i in 0..24 {
        assert_relative_eq!(
            filled.trend().primary()[i],
            10.0 + 0.1 * i as f64,
            epsilon = 1e-6
        );
    }
}

#[test]
fn weights_default_to_ones_with_observed_shape() {
    let series = monthly_series();
    let result = seasonal_decompose(&series, 12).unwrap();

    assert_eq!(result.weights().len(), 24);
    assert!(result.weights().primary().iter().all(|&w| w == 1.0));
    assert_eq!(result.nobs(), 24);
}

#[test]
fn missing_period_on_plain_series_is_a_configuration_error() {
    let series = monthly_series();
    let result = SeasonalDecompose::new().decompose(&series);
    assert!(matches!(result, Err(DecomposeError::Configuration(_))));
}

#[test]
fn short_series_error_reports_required_and_actual_counts() {
    let series = Series::from_values((0..10).map(|i| i as f64).collect());
    let err = SeasonalDecompose::new()
        .with_period(12)
        .decompose(&series)
        .unwrap_err();
    assert_eq!(err.to_string(), "24 observations required, 10 given");
}

#[test]
fn multiplicative_rejects_negative_observations() {
    let mut values: Vec<f64> = (0..24).map(|i| 10.0 + i as f64).collect();
    values[7] = -1.0;
    let series = Series::from_values(values);

    let err = SeasonalDecompose::new()
        .with_model(Model::Multiplicative)
        .with_period(12)
        .decompose(&series)
        .unwrap_err();
    assert_eq!(err, DecomposeError::Domain);
}

#[test]
fn nan_observations_are_rejected() {
    let mut values: Vec<f64> = (0..24).map(|i| 10.0 + i as f64).collect();
    values[3] = f64::NAN;
    let series = Series::from_values(values);

    let err = seasonal_decompose(&series, 12).unwrap_err();
    assert_eq!(err, DecomposeError::MissingData);
}

#[test]
fn frequency_hint_supplies_the_period() {
    let values: Vec<f64> = (0..24)
        .map(|i| 10.0 + (2.0 * PI * i as f64 / 12.0).sin())
        .collect();
    let series = SeriesBuilder::new()
        .values(values)
        .freq("M")
        .build()
        .unwrap();

    let result = SeasonalDecompose::new().decompose(&series).unwrap();
    let seasonal = result.seasonal().primary();
    for i in 0..12 {
        assert_eq!(seasonal[i], seasonal[i + 12]);
    }
}

#[test]
fn two_column_series_keeps_labels_on_every_component() {
    let col_a: Vec<f64> = (0..36)
        .map(|i| 10.0 + 0.1 * i as f64 + (2.0 * PI * i as f64 / 12.0).sin())
        .collect();
    let col_b: Vec<f64> = col_a.iter().map(|v| 2.0 * v).collect();
    let series = SeriesBuilder::new()
        .columns(vec![col_a, col_b])
        .labels(vec!["north".to_string(), "south".to_string()])
        .build()
        .unwrap();

    let result = seasonal_decompose(&series, 12).unwrap();
    for component in [
        result.observed(),
        result.seasonal(),
        result.trend(),
        result.resid(),
        result.weights(),
    ] {
        assert_eq!(component.ncols(), 2);
        assert_eq!(component.labels(), &["north", "south"]);
    }
}

fn decomposable_series() -> impl Strategy<Value = (Vec<f64>, usize)> {
    (2usize..13).prop_flat_map(|period| {
        (2 * period..200).prop_flat_map(move |len| {
            prop::collection::vec(1.0..1000.0f64, len).prop_map(move |v| (v, period))
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn additive_reconstruction_holds_for_random_series(
        (values, period) in decomposable_series()
    ) {
        let series = Series::from_values(values);
        let result = seasonal_decompose(&series, period).unwrap();

        let observed = result.observed().primary();
        let trend = result.trend().primary();
        let seasonal = result.seasonal().primary();
        let resid = result.resid().primary();

        for i in 0..series.len() {
            if trend[i].is_nan() {
                prop_assert!(resid[i].is_nan());
                continue;
            }
            let reconstructed = trend[i] + seasonal[i] + resid[i];
            prop_assert!(
                (observed[i] - reconstructed).abs() < 1e-8,
                "reconstruction failed at index {}: {} vs {}",
                i, observed[i], reconstructed
            );
        }
    }

    #[test]
    fn multiplicative_reconstruction_holds_for_random_series(
        (values, period) in decomposable_series()
    ) {
        let series = Series::from_values(values);
        let result = SeasonalDecompose::new()
            .with_model(Model::Multiplicative)
            .with_period(period)
            .decompose(&series)
            .unwrap();

        let observed = result.observed().primary();
        let trend = result.trend().primary();
        let seasonal = result.seasonal().primary();
        let resid = result.resid().primary();

        for i in 0..series.len() {
            if trend[i].is_nan() {
                prop_assert!(resid[i].is_nan());
                continue;
            }
            let reconstructed = trend[i] * seasonal[i] * resid[i];
            prop_assert!(
                (observed[i] - reconstructed).abs() <= 1e-8 * observed[i].abs(),
                "reconstruction failed at index {}: {} vs {}",
                i, observed[i], reconstructed
            );
        }
    }

    #[test]
    fn seasonal_tiling_is_periodic_for_random_series(
        (values, period) in decomposable_series()
    ) {
        let series = Series::from_values(values);
        let result = seasonal_decompose(&series, period).unwrap();

        let seasonal = result.seasonal().primary();
        for i in 0..(series.len() - period) {
            prop_assert_eq!(seasonal[i], seasonal[i + period]);
        }
    }

    #[test]
    fn extrapolated_residuals_are_always_defined(
        (values, period) in decomposable_series()
    ) {
        let series = Series::from_values(values);
        let result = SeasonalDecompose::new()
            .with_period(period)
            .with_extrapolation(ExtrapolateTrend::Freq)
            .decompose(&series)
            .unwrap();

        prop_assert!(result.trend().primary().iter().all(|v| !v.is_nan()));
        prop_assert!(result.resid().primary().iter().all(|v| !v.is_nan()));
    }
}
