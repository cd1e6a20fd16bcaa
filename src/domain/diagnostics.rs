//! Plot-ready diagnostic series derived from a regression result.
//!
//! Rendering is kept out of the fitting path entirely: the engine returns a
//! [`RegressionResult`], and any renderer (ASCII, SVG, an external tool) turns
//! it into pictures via this plain-data description.

use serde::{Deserialize, Serialize};

use crate::domain::RegressionResult;
use crate::math::normal_plotting_quantiles;

/// Reference line drawn behind a diagnostic scatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceLine {
    /// `y = c` across the x range.
    Horizontal(f64),
    /// `y = x`.
    Identity,
}

impl ReferenceLine {
    /// Evaluate the reference line at `x`.
    pub fn at(self, x: f64) -> f64 {
        match self {
            ReferenceLine::Horizontal(c) => c,
            ReferenceLine::Identity => x,
        }
    }
}

/// One diagnostic scatter with its reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
    pub reference: ReferenceLine,
}

impl DiagnosticPanel {
    /// Bounding box of the finite points, widened to cover the reference line.
    ///
    /// Returns `None` when there are no finite points. The box may be
    /// degenerate (zero width or height); renderers pad it.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];
        for &(px, py) in &self.points {
            if !(px.is_finite() && py.is_finite()) {
                continue;
            }
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }
        if !(x[0].is_finite() && x[1].is_finite()) {
            return None;
        }

        for px in x {
            let ry = self.reference.at(px);
            y = [y[0].min(ry), y[1].max(ry)];
        }

        Some((x, y))
    }
}

/// The three standard OLS diagnostic views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSeries {
    /// `(fitted, residual)` with a horizontal reference at zero.
    pub residuals_vs_fitted: DiagnosticPanel,
    /// `(theoretical normal quantile, standardized sorted residual)` with `y = x`.
    pub normal_qq: DiagnosticPanel,
    /// `(observed, fitted)` with the 45° line.
    pub actual_vs_predicted: DiagnosticPanel,
}

impl DiagnosticSeries {
    pub fn from_result(result: &RegressionResult) -> Self {
        let observed = result.observed();

        let residuals_vs_fitted = DiagnosticPanel {
            title: "Residuals vs Fitted".to_string(),
            x_label: "fitted".to_string(),
            y_label: "residual".to_string(),
            points: result
                .fitted_values
                .iter()
                .copied()
                .zip(result.residuals.iter().copied())
                .collect(),
            reference: ReferenceLine::Horizontal(0.0),
        };

        let normal_qq = DiagnosticPanel {
            title: "Normal Q-Q".to_string(),
            x_label: "theoretical quantile".to_string(),
            y_label: "standardized residual".to_string(),
            points: qq_points(&result.residuals),
            reference: ReferenceLine::Identity,
        };

        let actual_vs_predicted = DiagnosticPanel {
            title: "Actual vs Predicted".to_string(),
            x_label: "observed".to_string(),
            y_label: "fitted".to_string(),
            points: observed
                .into_iter()
                .zip(result.fitted_values.iter().copied())
                .collect(),
            reference: ReferenceLine::Identity,
        };

        Self {
            residuals_vs_fitted,
            normal_qq,
            actual_vs_predicted,
        }
    }

    /// Panels in display order.
    pub fn panels(&self) -> [&DiagnosticPanel; 3] {
        [
            &self.residuals_vs_fitted,
            &self.normal_qq,
            &self.actual_vs_predicted,
        ]
    }
}

/// Sorted residuals standardized by their sample mean and standard deviation,
/// paired with standard-normal plotting quantiles.
fn qq_points(residuals: &[f64]) -> Vec<(f64, f64)> {
    let n = residuals.len();
    if n == 0 {
        return Vec::new();
    }

    let mean = residuals.iter().sum::<f64>() / n as f64;
    let sd = if n > 1 {
        (residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0)).sqrt()
    } else {
        0.0
    };

    let mut sorted = residuals.to_vec();
    sorted.sort_by(f64::total_cmp);

    // Zero spread (e.g. a perfect fit): all standardized residuals are 0.
    let standardized = sorted.into_iter().map(|r| {
        if sd > 0.0 {
            (r - mean) / sd
        } else {
            0.0
        }
    });

    normal_plotting_quantiles(n)
        .into_iter()
        .zip(standardized)
        .collect()
}
