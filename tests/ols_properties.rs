//! Property and scenario tests for the OLS engine, exercised through the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ols_regress::domain::{ReferenceLine, SimulateConfig};
use ols_regress::{RegressionError, RegressionResult, fit};

/// Random design with an intercept column and `k` uniform predictors.
fn random_problem(seed: u64, n: usize, k: usize) -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = DMatrix::from_fn(n, k + 1, |_, j| if j == 0 { 1.0 } else { rng.gen_range(-5.0..5.0) });
    let y = DVector::from_fn(n, |_, _| rng.gen_range(-10.0..10.0));
    (x, y)
}

fn bitwise_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(l, r)| l.to_bits() == r.to_bits())
}

fn results_bitwise_equal(a: &RegressionResult, b: &RegressionResult) -> bool {
    bitwise_equal(&a.coefficients, &b.coefficients)
        && bitwise_equal(&a.fitted_values, &b.fitted_values)
        && bitwise_equal(&a.residuals, &b.residuals)
        && bitwise_equal(&a.standard_errors, &b.standard_errors)
        && bitwise_equal(&a.t_statistics, &b.t_statistics)
        && bitwise_equal(&a.p_values, &b.p_values)
        && bitwise_equal(
            &[a.mse, a.r_squared, a.adj_r_squared, a.f_statistic, a.f_p_value],
            &[b.mse, b.r_squared, b.adj_r_squared, b.f_statistic, b.f_p_value],
        )
        && a.df1 == b.df1
        && a.df2 == b.df2
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_perfect_linear_fit() {
    let x = DMatrix::from_row_slice(4, 2, &[1.0, 1.0, 1.0, 2.0, 1.0, 3.0, 1.0, 4.0]);
    let y = DVector::from_vec(vec![2.0, 4.0, 6.0, 8.0]);

    let result = fit(&x, &y).expect("fit should succeed");

    assert_abs_diff_eq!(result.coefficients[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.coefficients[1], 2.0, epsilon = 1e-9);
    for r in &result.residuals {
        assert_abs_diff_eq!(*r, 0.0, epsilon = 1e-9);
    }
    assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.mse, 0.0, epsilon = 1e-12);
}

#[test]
fn test_dimension_mismatch() {
    let x = DMatrix::from_element(5, 2, 1.0);
    let y = DVector::from_element(4, 1.0);

    let err = fit(&x, &y).unwrap_err();
    assert_eq!(err, RegressionError::DimensionMismatch { x_rows: 5, y_len: 4 });
}

#[test]
fn test_identical_columns_are_singular() {
    let x = DMatrix::from_row_slice(4, 3, &[
        1.0, 1.0, 1.0, //
        1.0, 2.0, 2.0, //
        1.0, 3.0, 3.0, //
        1.0, 4.0, 4.0,
    ]);
    let y = DVector::from_vec(vec![1.0, 3.0, 2.0, 5.0]);

    assert_eq!(fit(&x, &y).unwrap_err(), RegressionError::SingularMatrix);
}

#[test]
fn test_zero_residual_degrees_of_freedom() {
    let x = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 2.0]);
    let y = DVector::from_vec(vec![3.0, 5.0]);

    let err = fit(&x, &y).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DegenerateDegreesOfFreedom { n_obs: 2, n_params: 2 }
    );
}

// ============================================================================
// Properties over random designs
// ============================================================================

#[test]
fn test_properties_hold_on_random_designs() {
    for seed in 0..20u64 {
        let n = 8 + (seed as usize % 5) * 7;
        let k = 1 + seed as usize % 4;
        let (x, y) = random_problem(seed, n, k);

        let result = fit(&x, &y).expect("random design should be full rank");

        assert_eq!(result.coefficients.len(), k + 1);
        assert!(result.mse >= 0.0);
        assert!(
            (-1e-12..=1.0 + 1e-12).contains(&result.r_squared),
            "seed {seed}: r2 = {}",
            result.r_squared
        );
        assert_eq!(result.df1 + result.df2, n - 1);
        for i in 0..n {
            assert_relative_eq!(
                result.fitted_values[i] + result.residuals[i],
                y[i],
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }
        for p in &result.p_values {
            assert!((0.0..=1.0).contains(p), "seed {seed}: p = {p}");
        }
    }
}

#[test]
fn test_refit_is_bitwise_identical() {
    let (x, y) = random_problem(7, 30, 3);

    let first = fit(&x, &y).unwrap();
    let second = fit(&x, &y).unwrap();
    assert!(results_bitwise_equal(&first, &second));
}

#[test]
fn test_inputs_are_not_modified() {
    let (x, y) = random_problem(3, 12, 2);
    let (x_before, y_before) = (x.clone(), y.clone());

    let _ = fit(&x, &y).unwrap();
    assert_eq!(x, x_before);
    assert_eq!(y, y_before);
}

// ============================================================================
// Inference
// ============================================================================

#[test]
fn test_inference_matches_closed_form() {
    // y on x = 1..5 with intercept: beta = [0.6, 0.8], SSR = 3.6, sigma^2 = 1.2.
    let x = DMatrix::from_fn(5, 2, |i, j| if j == 0 { 1.0 } else { (i + 1) as f64 });
    let y = DVector::from_vec(vec![1.0, 3.0, 2.0, 5.0, 4.0]);

    let result = fit(&x, &y).unwrap();

    assert_relative_eq!(result.coefficients[0], 0.6, epsilon = 1e-10);
    assert_relative_eq!(result.coefficients[1], 0.8, epsilon = 1e-10);
    assert_relative_eq!(result.mse, 3.6 / 5.0, epsilon = 1e-10);
    assert_relative_eq!(result.r_squared, 0.64, epsilon = 1e-10);
    assert_relative_eq!(result.adj_r_squared, 0.52, epsilon = 1e-10);
    // se(slope) = sqrt(1.2 / 10)
    assert_relative_eq!(result.standard_errors[1], (0.12f64).sqrt(), epsilon = 1e-10);
    // With one predictor, F equals the squared slope t statistic and the p-values agree.
    assert_relative_eq!(result.f_statistic, result.t_statistics[1].powi(2), epsilon = 1e-9);
    assert_relative_eq!(result.f_p_value, result.p_values[1], epsilon = 1e-8);
    assert_eq!((result.df1, result.df2), (1, 3));
}

#[test]
fn test_inference_with_two_predictors() {
    // Orthogonal design: intercept, linear and quadratic contrasts on 5 points,
    // so XᵀX = diag(5, 10, 14) and every statistic has a closed form.
    let a = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let b = [2.0, -1.0, -2.0, -1.0, 2.0];
    let x = DMatrix::from_fn(5, 3, |i, j| match j {
        0 => 1.0,
        1 => a[i],
        _ => b[i],
    });
    let y = DVector::from_vec(vec![1.0, 3.0, 2.0, 5.0, 4.0]);

    let result = fit(&x, &y).unwrap();
    assert_eq!((result.df1, result.df2), (2, 2));

    // beta_j = x_jᵀy / x_jᵀx_j
    let beta = [3.0, 0.8, -1.0 / 7.0];
    for (est, truth) in result.coefficients.iter().zip(beta) {
        assert_relative_eq!(*est, truth, epsilon = 1e-10);
    }

    let sst = 10.0;
    let ss_model = 0.8f64.powi(2) * 10.0 + (1.0f64 / 7.0).powi(2) * 14.0;
    let sigma2 = (sst - ss_model) / 2.0;
    assert_relative_eq!(result.r_squared, ss_model / sst, epsilon = 1e-10);
    assert_relative_eq!(
        result.adj_r_squared,
        1.0 - (1.0 - ss_model / sst) * 4.0 / 2.0,
        epsilon = 1e-10
    );

    let se = [(sigma2 / 5.0).sqrt(), (sigma2 / 10.0).sqrt(), (sigma2 / 14.0).sqrt()];
    for j in 0..3 {
        assert_relative_eq!(result.standard_errors[j], se[j], epsilon = 1e-10);
        let t = beta[j] / se[j];
        assert_relative_eq!(result.t_statistics[j], t, epsilon = 1e-9);
        // Student t with 2 df: P(|T| > t) = 1 - |t| / sqrt(2 + t²).
        let p = 1.0 - t.abs() / (2.0 + t * t).sqrt();
        assert_relative_eq!(result.p_values[j], p, epsilon = 1e-8);
    }

    // F(2, 2): P(F > f) = 1 / (1 + f).
    let f = (ss_model / 2.0) / sigma2;
    assert_relative_eq!(result.f_statistic, f, epsilon = 1e-9);
    assert_relative_eq!(result.f_statistic, 46.8 / 23.2, epsilon = 1e-9);
    assert_relative_eq!(result.f_p_value, 1.0 / (1.0 + f), epsilon = 1e-8);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_diagnostic_series_are_plain_data() {
    let (x, y) = random_problem(5, 15, 2);
    let result = fit(&x, &y).unwrap();
    let diagnostics = result.diagnostics();

    let rvf = &diagnostics.residuals_vs_fitted;
    assert_eq!(rvf.reference, ReferenceLine::Horizontal(0.0));
    for (i, &(fx, r)) in rvf.points.iter().enumerate() {
        assert_eq!(fx, result.fitted_values[i]);
        assert_eq!(r, result.residuals[i]);
    }

    let avp = &diagnostics.actual_vs_predicted;
    assert_eq!(avp.reference, ReferenceLine::Identity);
    for (i, &(actual, predicted)) in avp.points.iter().enumerate() {
        assert_relative_eq!(actual, y[i], epsilon = 1e-9);
        assert_eq!(predicted, result.fitted_values[i]);
    }

    let qq = &diagnostics.normal_qq;
    assert_eq!(qq.points.len(), 15);
    assert!(qq.points.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 <= w[1].1));
}

// ============================================================================
// Simulated data
// ============================================================================

#[test]
fn test_recovers_simulated_coefficients() {
    let config = SimulateConfig {
        n_obs: 500,
        coefficients: vec![4.0, -1.5, 0.25],
        noise_sd: 0.5,
        seed: 2024,
        x_min: -3.0,
        x_max: 3.0,
        out: "unused.csv".into(),
    };
    let data = ols_regress::data::simulate(&config).unwrap();

    let n = data.y.len();
    let k = data.predictors.len();
    let x = DMatrix::from_fn(n, k + 1, |i, j| if j == 0 { 1.0 } else { data.rows[i][j - 1] });
    let y = DVector::from_vec(data.y.clone());

    let result = fit(&x, &y).unwrap();
    for (j, truth) in config.coefficients.iter().enumerate() {
        let bound = 5.0 * result.standard_errors[j];
        assert!(
            (result.coefficients[j] - truth).abs() < bound,
            "coefficient {j}: {} vs {truth} (5 se = {bound})",
            result.coefficients[j]
        );
    }
    assert_relative_eq!(result.residual_std_error(), 0.5, epsilon = 0.1);
}
