//! CSV ingest and normalization.
//!
//! This module turns a tabular CSV into a design matrix `X` (with an intercept
//! column prepended unless disabled) and a response vector `y`.
//!
//! Design goals:
//! - **Strict schema** for the selected columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (rows keep file order)
//! - **Separation of concerns**: no fitting logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use csv::StringRecord;
use nalgebra::{DMatrix, DVector};

use crate::domain::{Dataset, FitConfig, INTERCEPT_TERM, RowError};
use crate::error::AppError;

/// Resolved column layout: response index plus `(name, index)` per predictor.
#[derive(Debug, Clone)]
struct ColumnPlan {
    response: usize,
    predictors: Vec<(String, usize)>,
}

/// Load the CSV named in `config` into a [`Dataset`].
pub fn load_dataset(config: &FitConfig) -> Result<Dataset, AppError> {
    let file = File::open(&config.csv_path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open CSV '{}': {e}", config.csv_path.display()),
        )
    })?;
    read_dataset(file, config)
}

/// Read a dataset from any CSV source.
pub fn read_dataset<R: Read>(source: R, config: &FitConfig) -> Result<Dataset, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let plan = resolve_columns(&headers, &header_map, config)?;

    let mut rows: Vec<(f64, Vec<f64>)> = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &headers, &plan) {
            Ok(row) => rows.push(row),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    // The caller reports each skipped row; keep the per-row detail at debug.
    for e in &row_errors {
        log::debug!("skipping line {}: {}", e.line, e.message);
    }
    if !row_errors.is_empty() {
        log::warn!("skipped {} of {} CSV rows", row_errors.len(), rows_read);
    }

    let rows_used = rows.len();
    if rows_used == 0 {
        return Err(AppError::new(3, "No valid rows remain after validation."));
    }

    let offset = usize::from(config.intercept);
    let n_cols = plan.predictors.len() + offset;
    let x = DMatrix::from_fn(rows_used, n_cols, |i, j| {
        if j < offset { 1.0 } else { rows[i].1[j - offset] }
    });
    let y = DVector::from_iterator(rows_used, rows.iter().map(|(y, _)| *y));

    let mut terms = Vec::with_capacity(n_cols);
    if config.intercept {
        terms.push(INTERCEPT_TERM.to_string());
    }
    terms.extend(plan.predictors.iter().map(|(name, _)| name.clone()));

    Ok(Dataset {
        x,
        y,
        response: headers[plan.response].trim().to_string(),
        terms,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // First occurrence wins for duplicated headers.
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, schema validation will incorrectly
    // report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn resolve_columns(
    headers: &StringRecord,
    header_map: &HashMap<String, usize>,
    config: &FitConfig,
) -> Result<ColumnPlan, AppError> {
    let response_key = normalize_header_name(&config.response);
    let response = *header_map.get(&response_key).ok_or_else(|| {
        AppError::new(2, format!("Missing response column: `{}`", config.response))
    })?;

    let predictors: Vec<(String, usize)> = match &config.predictors {
        Some(names) => {
            let mut out: Vec<(String, usize)> = Vec::with_capacity(names.len());
            for name in names {
                let key = normalize_header_name(name);
                let idx = *header_map
                    .get(&key)
                    .ok_or_else(|| AppError::new(2, format!("Missing predictor column: `{name}`")))?;
                if idx == response {
                    return Err(AppError::new(
                        2,
                        format!("Column `{name}` is the response and cannot also be a predictor."),
                    ));
                }
                if out.iter().any(|(_, i)| *i == idx) {
                    return Err(AppError::new(2, format!("Predictor `{name}` listed more than once.")));
                }
                out.push((display_name(headers, idx), idx));
            }
            out
        }
        None => (0..headers.len())
            .filter(|&idx| idx != response)
            .map(|idx| (display_name(headers, idx), idx))
            .collect(),
    };

    if predictors.is_empty() && !config.intercept {
        return Err(AppError::new(
            2,
            "No predictors selected and the intercept is disabled: nothing to fit.",
        ));
    }

    Ok(ColumnPlan {
        response,
        predictors,
    })
}

fn display_name(headers: &StringRecord, idx: usize) -> String {
    headers[idx].trim().trim_start_matches('\u{feff}').to_string()
}

fn parse_row(record: &StringRecord, headers: &StringRecord, plan: &ColumnPlan) -> Result<(f64, Vec<f64>), String> {
    let y = parse_cell(record, headers, plan.response)?;
    let xs = plan
        .predictors
        .iter()
        .map(|(_, idx)| parse_cell(record, headers, *idx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((y, xs))
}

fn parse_cell(record: &StringRecord, headers: &StringRecord, idx: usize) -> Result<f64, String> {
    let name = display_name(headers, idx);
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing value for `{name}`."))?;
    let v = raw
        .parse::<f64>()
        .map_err(|_| format!("Non-numeric value '{raw}' for `{name}`."))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("Non-finite value '{raw}' for `{name}`."))
    }
}
