//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV ingest -> fit -> diagnostics
//!
//! The CLI front-end can then focus on presentation (printing, plotting, exports).

use crate::domain::{Dataset, DiagnosticSeries, FitConfig, RegressionResult};
use crate::error::AppError;

/// All computed outputs of a single `ols fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub result: RegressionResult,
    pub diagnostics: DiagnosticSeries,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Load and validate the CSV.
    let dataset = crate::io::load_dataset(config)?;
    log::info!(
        "loaded {} of {} rows from '{}' ({} columns in X)",
        dataset.rows_used,
        dataset.rows_read,
        config.csv_path.display(),
        dataset.x.ncols()
    );

    run_fit_with_dataset(dataset)
}

/// Execute the fitting pipeline on an already-loaded dataset.
pub fn run_fit_with_dataset(dataset: Dataset) -> Result<RunOutput, AppError> {
    // 2) Fit.
    let result = crate::fit::fit(&dataset.x, &dataset.y)?;
    log::info!(
        "fit complete: r2={:.6}, adj_r2={:.6}, df=({}, {})",
        result.r_squared,
        result.adj_r_squared,
        result.df1,
        result.df2
    );

    // 3) Derive plot inputs.
    let diagnostics = result.diagnostics();

    Ok(RunOutput {
        dataset,
        result,
        diagnostics,
    })
}
