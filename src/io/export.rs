//! Export per-observation results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts (e.g. an external plotting tool).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::RegressionResult;
use crate::error::AppError;

/// Write `row,observed,fitted,residual` for every observation.
pub fn write_observations_csv(path: &Path, result: &RegressionResult) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_observations(file, result)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV '{}': {e}", path.display())))
}

fn write_observations<W: Write>(mut out: W, result: &RegressionResult) -> std::io::Result<()> {
    writeln!(out, "row,observed,fitted,residual")?;
    let observed = result.observed();
    for (i, ((y, fit), res)) in observed
        .iter()
        .zip(&result.fitted_values)
        .zip(&result.residuals)
        .enumerate()
    {
        writeln!(out, "{},{:.10},{:.10},{:.10}", i + 1, y, fit, res)?;
    }
    out.flush()
}
