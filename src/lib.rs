//! `ols-regress` library crate.
//!
//! The binary (`ols`) is a thin wrapper around this library so that:
//!
//! - the regression engine is testable without spawning processes
//! - the engine, reporter and plot renderers can be reused independently
//!
//! The numerical core is [`fit::fit`]; everything else consumes its
//! [`domain::RegressionResult`].

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;

pub use domain::RegressionResult;
pub use fit::{RegressionError, fit};
