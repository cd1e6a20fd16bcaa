//! The regression engine.
//!
//! Responsibilities:
//!
//! - validate the shape of `X` / `y`
//! - estimate coefficients via the normal equations
//! - derive fit quality and inferential statistics
//!
//! Everything here is pure; I/O and rendering live in `io`, `report` and `plot`.

pub mod engine;
pub mod error;

pub use engine::*;
pub use error::*;
