//! Formatted terminal output for a fitted regression.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of presentation concerns
//! - output changes are localized

use crate::domain::{Dataset, RegressionResult};
use crate::report::summarize_residuals;

/// Number of skipped rows listed individually before summarizing the rest.
const MAX_LISTED_ROW_ERRORS: usize = 10;

/// Format the full regression summary.
///
/// `terms` labels the coefficients in order; missing labels fall back to
/// `x1, x2, ...`.
pub fn format_summary(result: &RegressionResult, terms: &[String], response: &str) -> String {
    let mut out = String::new();

    out.push_str("=== ols - Ordinary Least Squares ===\n");
    out.push_str(&format!("Response: {response}\n"));
    out.push_str(&format!(
        "Observations: n={} | Coefficients: p={}\n",
        result.n_obs(),
        result.n_params()
    ));

    out.push_str("\nResiduals:\n");
    if let Some(s) = summarize_residuals(&result.residuals) {
        out.push_str(&format!(
            "{:>12} {:>12} {:>12} {:>12} {:>12}\n",
            "Min", "1Q", "Median", "3Q", "Max"
        ));
        out.push_str(&format!(
            "{:>12} {:>12} {:>12} {:>12} {:>12}\n",
            fmt_num(s.min),
            fmt_num(s.q1),
            fmt_num(s.median),
            fmt_num(s.q3),
            fmt_num(s.max)
        ));
    }

    out.push_str("\nCoefficients:\n");
    out.push_str(
        format!(
            "{:<24} {:>14} {:>14} {:>12} {:>12} {:<3}\n",
            "term", "estimate", "std.error", "t value", "Pr(>|t|)", ""
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<24} {:-<14} {:-<14} {:-<12} {:-<12}\n",
            "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (j, estimate) in result.coefficients.iter().enumerate() {
        let label = terms
            .get(j)
            .cloned()
            .unwrap_or_else(|| format!("x{}", j + 1));
        let p = stat_at(&result.p_values, j);
        out.push_str(
            format!(
                "{:<24} {:>14} {:>14} {:>12} {:>12} {:<3}\n",
                truncate(&label, 24),
                fmt_num(*estimate),
                fmt_num(stat_at(&result.standard_errors, j)),
                fmt_stat(stat_at(&result.t_statistics, j)),
                fmt_p(p),
                significance_code(p),
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out.push_str("---\nSignif. codes: 0 '***' 0.001 '**' 0.01 '*' 0.05 '.' 0.1 ' ' 1\n");

    out.push_str("\nFit:\n");
    out.push_str(&format!("- MSE: {}\n", fmt_num(result.mse)));
    out.push_str(&format!(
        "- Residual standard error: {} on {} degrees of freedom\n",
        fmt_num(result.residual_std_error()),
        result.df2
    ));
    out.push_str(&format!(
        "- R-squared: {} | Adjusted R-squared: {}\n",
        fmt_num(result.r_squared),
        fmt_num(result.adj_r_squared)
    ));
    out.push_str(&format!(
        "- F-statistic: {} on {} and {} DF | p-value: {}\n",
        fmt_stat(result.f_statistic),
        result.df1,
        result.df2,
        fmt_p(result.f_p_value)
    ));

    out
}

/// Format one line per observation: row, observed, fitted and residual.
pub fn format_observations(result: &RegressionResult) -> String {
    let mut out = String::new();
    out.push_str("Observations:\n");
    out.push_str(&format!(
        "{:>6} {:>14} {:>14} {:>14}\n",
        "row", "observed", "fitted", "residual"
    ));
    let observed = result.observed();
    for (i, ((y, fit), res)) in observed
        .iter()
        .zip(&result.fitted_values)
        .zip(&result.residuals)
        .enumerate()
    {
        out.push_str(&format!(
            "{:>6} {:>14} {:>14} {:>14}\n",
            i + 1,
            fmt_num(*y),
            fmt_num(*fit),
            fmt_num(*res)
        ));
    }
    out
}

/// Missing entries (a hand-edited or truncated result) render as NaN.
fn stat_at(values: &[f64], j: usize) -> f64 {
    values.get(j).copied().unwrap_or(f64::NAN)
}

/// Format the list of rows skipped during ingest (empty string when none).
pub fn format_row_errors(dataset: &Dataset) -> String {
    if dataset.row_errors.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Skipped {} of {} rows:\n",
        dataset.row_errors.len(),
        dataset.rows_read
    ));
    for e in dataset.row_errors.iter().take(MAX_LISTED_ROW_ERRORS) {
        out.push_str(&format!("  line {}: {}\n", e.line, e.message));
    }
    let remaining = dataset.row_errors.len().saturating_sub(MAX_LISTED_ROW_ERRORS);
    if remaining > 0 {
        out.push_str(&format!("  ... and {remaining} more\n"));
    }
    out
}

/// R-style significance code for a p-value.
pub fn significance_code(p: f64) -> &'static str {
    if !p.is_finite() {
        ""
    } else if p < 0.001 {
        "***"
    } else if p < 0.01 {
        "**"
    } else if p < 0.05 {
        "*"
    } else if p < 0.1 {
        "."
    } else {
        ""
    }
}

fn fmt_num(v: f64) -> String {
    format!("{v:.6}")
}

fn fmt_stat(v: f64) -> String {
    format!("{v:.4}")
}

fn fmt_p(p: f64) -> String {
    if p.is_finite() && p < 1e-4 {
        format!("{p:.3e}")
    } else {
        format!("{p:.6}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
