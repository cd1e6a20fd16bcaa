//! Reporting utilities: residual summaries and formatted terminal output.

pub mod format;

pub use format::*;

/// Five-number summary of the residuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize residuals with linearly interpolated quartiles.
///
/// Returns `None` for an empty slice.
pub fn summarize_residuals(residuals: &[f64]) -> Option<ResidualSummary> {
    if residuals.is_empty() {
        return None;
    }
    let mut sorted = residuals.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(ResidualSummary {
        min: sorted[0],
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
