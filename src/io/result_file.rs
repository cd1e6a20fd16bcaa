//! Read/write result JSON files.
//!
//! Result JSON is the "portable" representation of a fit:
//! - response and term labels
//! - the full regression result (coefficients, inference, fitted values, residuals)
//!
//! It is enough to re-render the diagnostics later (`ols plot`).

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::RegressionResult;
use crate::error::AppError;

/// On-disk schema for a saved fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFile {
    pub tool: String,
    pub response: String,
    pub terms: Vec<String>,
    pub result: RegressionResult,
}

impl ResultFile {
    pub fn new(result: &RegressionResult, terms: &[String], response: &str) -> Self {
        Self {
            tool: "ols".to_string(),
            response: response.to_string(),
            terms: terms.to_vec(),
            result: result.clone(),
        }
    }
}

/// Write a result JSON file.
pub fn write_result_json(path: &Path, file: &ResultFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create result JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(2, format!("Failed to write result JSON: {e}")))?;
    Ok(())
}

/// Read a result JSON file.
pub fn read_result_json(path: &Path) -> Result<ResultFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open result JSON '{}': {e}", path.display())))?;
    let parsed: ResultFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid result JSON: {e}")))?;

    check_lengths(&parsed.result)
        .map_err(|msg| AppError::new(2, format!("Invalid result JSON: {msg}")))?;
    Ok(parsed)
}

/// Check every vector against the counts implied by `df1` / `df2`.
fn check_lengths(r: &RegressionResult) -> Result<(), String> {
    let p = r.n_params();
    let n = r.n_obs();
    let per_coefficient = [
        ("coefficients", r.coefficients.len()),
        ("standard_errors", r.standard_errors.len()),
        ("t_statistics", r.t_statistics.len()),
        ("p_values", r.p_values.len()),
    ];
    for (name, len) in per_coefficient {
        if len != p {
            return Err(format!("`{name}` has {len} entries, expected p={p}."));
        }
    }
    for (name, len) in [("fitted_values", r.fitted_values.len()), ("residuals", r.residuals.len())] {
        if len != n {
            return Err(format!("`{name}` has {len} entries, expected n={n}."));
        }
    }
    Ok(())
}
