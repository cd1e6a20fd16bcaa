//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and initializes logging
//! - loads data and fits the regression
//! - prints the report and diagnostic plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, PlotArgs, PlotOptions, SimulateArgs};
use crate::domain::{DiagnosticSeries, FitConfig, SimulateConfig};
use crate::error::AppError;

pub mod pipeline;

/// SVG canvas size (pixels) for the three side-by-side panels.
const SVG_SIZE: (u32, u32) = (1500, 500);

/// Entry point for the `ols` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Plot(args) => handle_plot(args),
        Command::Simulate(args) => handle_simulate(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    // A second init (e.g. from tests) is harmless; keep the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    let skipped = crate::report::format_row_errors(&run.dataset);
    if !skipped.is_empty() {
        println!("{skipped}");
    }
    println!(
        "{}",
        crate::report::format_summary(&run.result, &run.dataset.terms, &run.dataset.response)
    );
    if config.show_observations {
        println!("{}", crate::report::format_observations(&run.result));
    }

    render_diagnostics(
        &run.diagnostics,
        config.plot,
        config.plot_width,
        config.plot_height,
        config.svg.as_deref(),
    )?;

    // Optional exports.
    if let Some(path) = &config.export_observations {
        crate::io::write_observations_csv(path, &run.result)?;
        log::info!("wrote observations to '{}'", path.display());
    }
    if let Some(path) = &config.export_json {
        let file = crate::io::ResultFile::new(&run.result, &run.dataset.terms, &run.dataset.response);
        crate::io::write_result_json(path, &file)?;
        log::info!("wrote result JSON to '{}'", path.display());
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_result_json(&args.result)?;
    let diagnostics = file.result.diagnostics();
    let PlotOptions {
        no_plot,
        width,
        height,
        svg,
    } = args.plot;

    render_diagnostics(&diagnostics, !no_plot, width, height, svg.as_deref())
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = simulate_config_from_args(&args);
    let data = crate::data::simulate(&config)?;
    crate::data::write_simulated_csv(&config.out, &data)?;
    println!(
        "Wrote {} rows ({} predictors) to {}",
        data.y.len(),
        data.predictors.len(),
        config.out.display()
    );
    Ok(())
}

fn render_diagnostics(
    diagnostics: &DiagnosticSeries,
    ascii: bool,
    width: usize,
    height: usize,
    svg: Option<&std::path::Path>,
) -> Result<(), AppError> {
    if ascii {
        println!("{}", crate::plot::render_ascii_diagnostics(diagnostics, width, height));
    }
    if let Some(path) = svg {
        crate::plot::write_svg_diagnostics(path, diagnostics, SVG_SIZE.0, SVG_SIZE.1)?;
        log::info!("wrote diagnostics SVG to '{}'", path.display());
    }
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        csv_path: args.csv.clone(),
        response: args.response.clone(),
        predictors: args.predictors.clone(),
        intercept: !args.no_intercept,
        show_observations: args.observations,
        plot: !args.plot.no_plot,
        plot_width: args.plot.width,
        plot_height: args.plot.height,
        svg: args.plot.svg.clone(),
        export_observations: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

pub fn simulate_config_from_args(args: &SimulateArgs) -> SimulateConfig {
    SimulateConfig {
        n_obs: args.n_obs,
        coefficients: args.coefficients.clone(),
        noise_sd: args.noise,
        seed: args.seed,
        x_min: args.x_min,
        x_max: args.x_max,
        out: args.out.clone(),
    }
}
