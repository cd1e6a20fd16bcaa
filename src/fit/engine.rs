//! Ordinary least squares via the normal equations.
//!
//! Given an `n × p` design matrix `X` and a response `y`, [`fit`] computes:
//!
//! - `β = (XᵀX)⁻¹ Xᵀy`, fitted values and residuals
//! - MSE (divisor `n`), R² and adjusted R²
//! - `σ² = SSR / (n - p)`, standard errors from `σ² (XᵀX)⁻¹`
//! - per-coefficient t statistics and two-sided p-values (`t`, `df = n - p`)
//! - the overall F statistic against the intercept-only model
//!
//! The function is pure: it reads its inputs, allocates local state, and
//! returns a fresh [`RegressionResult`].

use nalgebra::{DMatrix, DVector};

use crate::domain::RegressionResult;
use crate::fit::RegressionError;
use crate::math::{f_upper_tail, gram_matrix, invert_gram, normal_equation_coefficients, two_sided_t_p_values};

/// Fit an OLS regression of `y` on the columns of `x`.
///
/// `x` is used as given; include a column of 1s for an intercept.
pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<RegressionResult, RegressionError> {
    let n = x.nrows();
    let p = x.ncols();

    if n != y.len() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: n,
            y_len: y.len(),
        });
    }
    if n == 0 || p == 0 {
        return Err(RegressionError::EmptyInput {
            n_obs: n,
            n_params: p,
        });
    }
    // rank(XᵀX) <= n < p
    if p > n {
        return Err(RegressionError::SingularMatrix);
    }

    log::debug!("fitting OLS: n={n}, p={p}");

    let gram_inverse = invert_gram(&gram_matrix(x)).ok_or(RegressionError::SingularMatrix)?;

    if n == p {
        return Err(RegressionError::DegenerateDegreesOfFreedom {
            n_obs: n,
            n_params: p,
        });
    }

    let beta = normal_equation_coefficients(x, y, &gram_inverse);
    let fitted = x * &beta;
    let residuals = y - &fitted;

    let n_f = n as f64;
    let df1 = p - 1;
    let df2 = n - p;

    let ssr = residuals.norm_squared();
    let y_mean = y.mean();
    let sst: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();

    let mse = ssr / n_f;
    let r_squared = 1.0 - ssr / sst;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n_f - 1.0) / df2 as f64;

    let sigma2 = ssr / df2 as f64;
    let standard_errors: Vec<f64> = gram_inverse
        .diagonal()
        .iter()
        .map(|v| (sigma2 * v).sqrt())
        .collect();

    let t_statistics: Vec<f64> = beta
        .iter()
        .zip(&standard_errors)
        .map(|(b, se)| b / se)
        .collect();
    let p_values = two_sided_t_p_values(&t_statistics, df2 as f64)
        .map_err(|e| RegressionError::Distribution(e.to_string()))?;

    let (f_statistic, f_p_value) = if df1 == 0 {
        // Intercept-only (or single-column) model: nothing to test against.
        (f64::NAN, f64::NAN)
    } else {
        let f = ((sst - ssr) / df1 as f64) / sigma2;
        let p = f_upper_tail(f, df1 as f64, df2 as f64)
            .map_err(|e| RegressionError::Distribution(e.to_string()))?;
        (f, p)
    };

    log::debug!("OLS fit done: r2={r_squared:.6}, mse={mse:.6e}, f={f_statistic:.4}");

    Ok(RegressionResult {
        coefficients: beta.iter().copied().collect(),
        fitted_values: fitted.iter().copied().collect(),
        residuals: residuals.iter().copied().collect(),
        mse,
        r_squared,
        adj_r_squared,
        standard_errors,
        t_statistics,
        p_values,
        f_statistic,
        f_p_value,
        df1,
        df2,
    })
}
