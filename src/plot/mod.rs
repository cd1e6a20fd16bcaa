//! Diagnostic plot renderers.
//!
//! - terminal ASCII panels (`ascii`)
//! - SVG file output via Plotters (`svg`)
//!
//! Both consume [`crate::domain::DiagnosticSeries`] and never touch the engine.

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;

/// Pad a `[min, max]` range by `frac` of its span.
///
/// Degenerate ranges (zero span) are widened by `0.5` on each side so they
/// can still be mapped onto a grid or chart.
pub(crate) fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = if span > 0.0 { span * frac } else { 0.5 };
    (min - pad, max + pad)
}
