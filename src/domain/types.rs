//! Shared configuration and dataset types.
//!
//! Configuration structs are plain data derived from CLI flags (plus defaults)
//! so the pipeline can be driven from tests without going through `clap`.

use std::path::PathBuf;

use nalgebra::{DMatrix, DVector};

/// Label used for the prepended intercept column.
pub const INTERCEPT_TERM: &str = "(Intercept)";

/// Fully-resolved configuration for a `fit` run.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub csv_path: PathBuf,
    /// Response column (matched case-insensitively).
    pub response: String,
    /// Predictor columns; `None` means every non-response column.
    pub predictors: Option<Vec<String>>,
    /// Prepend a column of 1s to the design matrix.
    pub intercept: bool,

    /// Print fitted values and residuals for every observation.
    pub show_observations: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub svg: Option<PathBuf>,

    pub export_observations: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// Configuration for synthetic dataset generation.
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub n_obs: usize,
    /// `[β0, β1, ..., βk]`: intercept followed by one slope per predictor.
    pub coefficients: Vec<f64>,
    /// Standard deviation of the Gaussian noise added to the response.
    pub noise_sd: f64,
    pub seed: u64,
    pub x_min: f64,
    pub x_max: f64,
    pub out: PathBuf,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: design matrix, response, and bookkeeping.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: DMatrix<f64>,
    pub y: DVector<f64>,
    pub response: String,
    /// One label per column of `x`.
    pub terms: Vec<String>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}
