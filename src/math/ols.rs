//! Normal-equation primitives.
//!
//! The engine solves
//!
//! ```text
//! β = (XᵀX)⁻¹ Xᵀy
//! ```
//!
//! by explicitly inverting the Gram matrix `XᵀX`. The inverse is needed anyway
//! for the coefficient covariance `σ² (XᵀX)⁻¹`, so it is computed once and
//! reused for both.
//!
//! Explicit inversion squares the condition number of `X`. We accept that for
//! the small, well-conditioned designs this tool targets, and guard against
//! silent garbage with a residual check on the computed inverse.

use nalgebra::{DMatrix, DVector};

/// Maximum tolerated entry of `G·G⁻¹ − I` before `G` is treated as singular.
pub const INVERSE_RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Compute the Gram matrix `XᵀX`.
pub fn gram_matrix(x: &DMatrix<f64>) -> DMatrix<f64> {
    x.tr_mul(x)
}

/// Invert a Gram matrix.
///
/// Returns `None` when the matrix is singular or so ill-conditioned that the
/// computed inverse does not reproduce the identity.
pub fn invert_gram(gram: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    if !gram.is_square() || gram.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let inverse = gram.clone().try_inverse()?;
    if inverse.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let p = gram.nrows();
    let residual = gram * &inverse - DMatrix::<f64>::identity(p, p);
    if residual.amax() > INVERSE_RESIDUAL_TOLERANCE {
        return None;
    }

    Some(inverse)
}

/// Solve the normal equations given a precomputed `(XᵀX)⁻¹`.
pub fn normal_equation_coefficients(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    gram_inverse: &DMatrix<f64>,
) -> DVector<f64> {
    gram_inverse * x.tr_mul(y)
}
