use thiserror::Error;

/// Ways a single [`fit`](crate::fit::fit) call can fail.
///
/// All failures abort the fit; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("empty input: {n_obs} observations, {n_params} predictors")]
    EmptyInput { n_obs: usize, n_params: usize },

    #[error("Gram matrix XᵀX is singular (collinear predictors or more predictors than observations)")]
    SingularMatrix,

    #[error(
        "no residual degrees of freedom: {n_obs} observations for {n_params} coefficients (need n > p)"
    )]
    DegenerateDegreesOfFreedom { n_obs: usize, n_params: usize },

    #[error("distribution error: {0}")]
    Distribution(String),
}
