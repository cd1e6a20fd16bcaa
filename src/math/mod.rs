//! Mathematical utilities: normal equations and reference distributions.

pub mod distributions;
pub mod ols;

pub use distributions::*;
pub use ols::*;
