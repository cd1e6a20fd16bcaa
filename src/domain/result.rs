//! The regression result record.

use serde::{Deserialize, Serialize};

use crate::domain::DiagnosticSeries;
use crate::domain::serde_nan;

/// Output of a single OLS fit.
///
/// Created atomically by [`crate::fit::fit`] and never mutated afterwards.
/// Vectors indexed by coefficient have length `p`; vectors indexed by
/// observation have length `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub coefficients: Vec<f64>,
    pub fitted_values: Vec<f64>,
    pub residuals: Vec<f64>,
    /// Mean of squared residuals (divisor `n`).
    #[serde(with = "serde_nan::scalar")]
    pub mse: f64,
    /// `1 - SSR/SST`, not clamped.
    #[serde(with = "serde_nan::scalar")]
    pub r_squared: f64,
    #[serde(with = "serde_nan::scalar")]
    pub adj_r_squared: f64,
    #[serde(with = "serde_nan::vector")]
    pub standard_errors: Vec<f64>,
    #[serde(with = "serde_nan::vector")]
    pub t_statistics: Vec<f64>,
    #[serde(with = "serde_nan::vector")]
    pub p_values: Vec<f64>,
    /// NaN when the model has no slope terms (`df1 == 0`).
    #[serde(with = "serde_nan::scalar")]
    pub f_statistic: f64,
    #[serde(with = "serde_nan::scalar")]
    pub f_p_value: f64,
    /// Model degrees of freedom, `p - 1`.
    pub df1: usize,
    /// Residual degrees of freedom, `n - p`.
    pub df2: usize,
}

impl RegressionResult {
    /// Number of observations `n`.
    pub fn n_obs(&self) -> usize {
        self.df1 + self.df2 + 1
    }

    /// Number of estimated coefficients `p`.
    pub fn n_params(&self) -> usize {
        self.df1 + 1
    }

    /// Residual sum of squares.
    pub fn ssr(&self) -> f64 {
        self.residuals.iter().map(|r| r * r).sum()
    }

    /// Residual standard error `sqrt(SSR / df2)`.
    pub fn residual_std_error(&self) -> f64 {
        (self.ssr() / self.df2 as f64).sqrt()
    }

    /// Observed responses reconstructed as `fitted + residual`.
    pub fn observed(&self) -> Vec<f64> {
        self.fitted_values
            .iter()
            .zip(&self.residuals)
            .map(|(f, r)| f + r)
            .collect()
    }

    /// Plot-ready diagnostic series for this fit.
    pub fn diagnostics(&self) -> DiagnosticSeries {
        DiagnosticSeries::from_result(self)
    }
}
