//! Core types and statistics for outlier detection
//!
//! This crate holds the pieces shared by every detector in the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`validation`]: checks on measurements and thresholds
//! - [`percentile`]: linear-interpolation percentiles over sorted data
//! - [`utils`]: sorting and moments (mean, population standard deviation)
//!
//! All statistics are generic over [`num_traits::Float`], so `f32` and `f64`
//! samples are handled by the same code.
//!
//! # Example
//!
//! ```rust
//! use outlier_core::{percentile::quartiles_sorted, utils::sorted};
//!
//! let data = sorted(&[5.0, 1.0, 4.0, 2.0, 3.0]);
//! let (q1, q3) = quartiles_sorted(&data).unwrap();
//! assert_eq!((q1, q3), (2.0, 4.0));
//! ```

pub mod error;
pub mod percentile;
pub mod utils;
pub mod validation;

pub use error::{Error, Result};
pub use percentile::{percentile_sorted, quartiles_sorted};
pub use validation::{threshold_as, validate_measures, validate_threshold};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
