//! Utility types and functions for assetkit.
//!
//! This module contains fundamentals used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - Tolerance-based float comparison helpers

mod approx;
mod error;

pub use approx::*;
pub use error::*;
