//! Synthetic regression datasets.
//!
//! Generates `n` rows of `k` uniform predictors and a linear response with
//! Gaussian noise:
//!
//! ```text
//! y = β0 + Σ βj · xj + ε,   ε ~ N(0, σ²)
//! ```
//!
//! Generation is fully determined by the seed, so demos and tests are
//! reproducible.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::SimulateConfig;
use crate::error::AppError;

/// A generated dataset: one row of predictors per observation plus the response.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedData {
    /// Predictor names `x1..xk`.
    pub predictors: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub y: Vec<f64>,
}

pub fn simulate(config: &SimulateConfig) -> Result<SimulatedData, AppError> {
    if config.n_obs == 0 {
        return Err(AppError::new(2, "Observation count must be > 0."));
    }
    if config.coefficients.is_empty() {
        return Err(AppError::new(2, "At least one coefficient (the intercept) is required."));
    }
    if config.coefficients.iter().any(|b| !b.is_finite()) {
        return Err(AppError::new(2, "Coefficients must be finite."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(2, "Invalid predictor range for simulation."));
    }
    if !(config.noise_sd.is_finite() && config.noise_sd >= 0.0) {
        return Err(AppError::new(2, "Noise standard deviation must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = Normal::new(0.0, config.noise_sd)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let (intercept, slopes) = config.coefficients.split_at(1);
    let intercept = intercept[0];
    let k = slopes.len();

    let mut rows = Vec::with_capacity(config.n_obs);
    let mut y = Vec::with_capacity(config.n_obs);

    for _ in 0..config.n_obs {
        let row: Vec<f64> = (0..k)
            .map(|_| rng.gen_range(config.x_min..=config.x_max))
            .collect();
        let signal: f64 = intercept + row.iter().zip(slopes).map(|(x, b)| x * b).sum::<f64>();
        y.push(signal + noise.sample(&mut rng));
        rows.push(row);
    }

    Ok(SimulatedData {
        predictors: (1..=k).map(|j| format!("x{j}")).collect(),
        rows,
        y,
    })
}

/// Write a simulated dataset as CSV with columns `x1..xk,y`.
pub fn write_simulated_csv(path: &Path, data: &SimulatedData) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create CSV '{}': {e}", path.display())))?;
    write_simulated(file, data)
        .map_err(|e| AppError::new(2, format!("Failed to write CSV '{}': {e}", path.display())))
}

fn write_simulated<W: Write>(out: W, data: &SimulatedData) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header: Vec<&str> = data.predictors.iter().map(String::as_str).collect();
    header.push("y");
    writer.write_record(&header)?;

    for (row, y) in data.rows.iter().zip(&data.y) {
        let mut record: Vec<String> = row.iter().map(|v| format!("{v:.10}")).collect();
        record.push(format!("{y:.10}"));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
