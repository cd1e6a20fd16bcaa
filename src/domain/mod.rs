//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run configuration (`FitConfig`, `SimulateConfig`)
//! - the loaded design matrix and response (`Dataset`)
//! - fit outputs (`RegressionResult`, `DiagnosticSeries`)

pub mod diagnostics;
pub mod result;
pub mod serde_nan;
pub mod types;

pub use diagnostics::*;
pub use result::*;
pub use types::*;
