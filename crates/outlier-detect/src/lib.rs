//! Outlier detection for one-dimensional measurements
//!
//! This crate flags individual measurements as outliers. Every detector takes
//! a slice of measurements and returns an [`OutlierMask`] of the same length,
//! where `true` marks an outlier.
//!
//! # Algorithms
//!
//! - **IQR** ([`IqrDetector`], [`iqr_detector`]): Tukey's fences at
//!   `Q1 - k * IQR` and `Q3 + k * IQR`, `k = 1.5` by default. Robust to the
//!   outliers it is looking for.
//! - **Z-score** ([`ZScoreDetector`], [`zscore_detector`]): flags values more
//!   than `threshold` population standard deviations from the mean,
//!   `threshold = 2.5` by default. Assumes roughly normal data; a single large
//!   outlier inflates the standard deviation it is measured against.
//!
//! Both detectors are stateless: calling them twice on the same sample gives
//! the same mask, and permuting the sample permutes the mask.
//!
//! ## Usage
//!
//! ```rust
//! use outlier_detect::{IqrDetector, OutlierDetector, ZScoreDetector};
//!
//! let measures = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 50.0];
//!
//! let iqr = IqrDetector::default().detect(&measures).unwrap();
//! assert_eq!(iqr.indices(), vec![9]);
//!
//! let zscore = ZScoreDetector::new(2.5).unwrap().detect(&measures).unwrap();
//! assert_eq!(zscore.len(), measures.len());
//! ```

pub mod iqr;
pub mod traits;
pub mod types;
pub mod zscore;

pub use iqr::{iqr_detector, IqrDetector, IqrParameters, DEFAULT_IQR_PROPORTION};
pub use zscore::{zscore_detector, ZScoreDetector, ZScoreParameters, DEFAULT_ZSCORE_THRESHOLD};

pub use traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
pub use types::{IqrFences, OutlierMask, ZScoreSummary};

pub use outlier_core::{Error, Result};
