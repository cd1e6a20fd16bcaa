//! Command-line parsing for the `ols` tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the regression and reporting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ols", version, about = "Ordinary least squares regression with inference and diagnostics")]
pub struct Cli {
    /// Log progress at info level (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a regression from a CSV file, print the summary, and optionally plot/export.
    Fit(FitArgs),
    /// Re-render diagnostics from a result JSON written by `ols fit --export-json`.
    Plot(PlotArgs),
    /// Write a synthetic linear dataset to CSV.
    Simulate(SimulateArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input CSV file (header row required).
    #[arg(long, value_name = "CSV")]
    pub csv: PathBuf,

    /// Response column name.
    #[arg(short = 'y', long)]
    pub response: String,

    /// Predictor columns (comma-separated). Defaults to every other column.
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub predictors: Option<Vec<String>>,

    /// Do not prepend an intercept column.
    #[arg(long)]
    pub no_intercept: bool,

    /// Print observed, fitted and residual values for every row.
    #[arg(long)]
    pub observations: bool,

    #[command(flatten)]
    pub plot: PlotOptions,

    /// Export per-observation fitted values and residuals to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full result (coefficients, inference, residuals) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Diagnostic plot options shared by `fit` and `plot`.
#[derive(Debug, Args, Clone)]
pub struct PlotOptions {
    /// Disable the terminal diagnostic plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Terminal plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Terminal plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Also write the diagnostics to an SVG file.
    #[arg(long, value_name = "SVG")]
    pub svg: Option<PathBuf>,
}

/// Options for plotting a saved result.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Result JSON file produced by `ols fit --export-json`.
    #[arg(long, value_name = "JSON")]
    pub result: PathBuf,

    #[command(flatten)]
    pub plot: PlotOptions,
}

/// Options for synthetic data generation.
#[derive(Debug, Parser)]
pub struct SimulateArgs {
    /// Output CSV file.
    #[arg(long, value_name = "CSV")]
    pub out: PathBuf,

    /// Number of observations.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub n_obs: usize,

    /// True coefficients: intercept followed by one slope per predictor.
    #[arg(long = "coef", value_delimiter = ',', allow_hyphen_values = true, default_values_t = [1.0, 2.0])]
    pub coefficients: Vec<f64>,

    /// Standard deviation of the Gaussian noise.
    #[arg(long, default_value_t = 1.0)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Lower bound for uniformly drawn predictor values.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub x_min: f64,

    /// Upper bound for uniformly drawn predictor values.
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pub x_max: f64,
}
