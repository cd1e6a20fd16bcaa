//! Reference distributions used for inference.
//!
//! Thin wrappers around `statrs` so the engine can stay free of distribution
//! construction details and of the special cases (NaN / infinite statistics)
//! that `statrs` does not define.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};
use statrs::StatsError;

/// Two-sided p-values `2 · (1 − F_t(|t|; df))` for t statistics sharing one df.
///
/// A NaN statistic yields a NaN p-value.
pub fn two_sided_t_p_values(t: &[f64], df: f64) -> Result<Vec<f64>, StatsError> {
    let dist = StudentsT::new(0.0, 1.0, df)?;
    Ok(t.iter().map(|&t| two_sided_p(&dist, t)).collect())
}

fn two_sided_p(dist: &StudentsT, t: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return 0.0;
    }
    2.0 * (1.0 - dist.cdf(t.abs()))
}

/// Upper-tail probability `1 − F_F(f; df1, df2)` of an F statistic.
pub fn f_upper_tail(f: f64, df1: f64, df2: f64) -> Result<f64, StatsError> {
    if f.is_nan() {
        return Ok(f64::NAN);
    }
    if f == f64::INFINITY {
        return Ok(0.0);
    }
    let dist = FisherSnedecor::new(df1, df2)?;
    Ok(1.0 - dist.cdf(f.max(0.0)))
}

/// Standard-normal quantiles at the plotting positions `(i − 0.5) / n`.
pub fn normal_plotting_quantiles(n: usize) -> Vec<f64> {
    // N(0, 1) parameters are always valid.
    let Ok(normal) = Normal::new(0.0, 1.0) else {
        return vec![f64::NAN; n];
    };
    (0..n)
        .map(|i| normal.inverse_cdf((i as f64 + 0.5) / n as f64))
        .collect()
}
