//! Outlier detection for one-dimensional measurements
//!
//! `findoutlie` bundles the workspace crates behind a single dependency:
//!
//! - [`stats`] (`outlier-core`): error type, validation, percentiles and moments
//! - [`detectors`] (`outlier-detect`): the IQR and Z-score detectors
//!
//! Each detector takes a slice of measurements and returns an
//! [`OutlierMask`] of the same length where `true` marks an outlier.
//!
//! # Example
//!
//! ```rust
//! use findoutlie::prelude::*;
//!
//! let measures = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 50.0];
//!
//! let mask = iqr_detector(&measures, DEFAULT_IQR_PROPORTION)?;
//! assert_eq!(mask.indices(), vec![9]);
//!
//! let mask = zscore_detector(&[10.0, 10.0, 10.0, 10.0, 100.0], DEFAULT_ZSCORE_THRESHOLD)?;
//! assert!(!mask.any());
//! # Ok::<(), findoutlie::Error>(())
//! ```

pub use outlier_core as stats;
pub use outlier_detect as detectors;

pub use outlier_core::{Error, Result};
pub use outlier_detect::{
    iqr_detector, zscore_detector, ConfigurableDetector, IqrDetector, IqrFences, IqrParameters,
    OutlierDetector, OutlierDetectorProperties, OutlierMask, ZScoreDetector, ZScoreParameters,
    ZScoreSummary, DEFAULT_IQR_PROPORTION, DEFAULT_ZSCORE_THRESHOLD,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        iqr_detector, zscore_detector, ConfigurableDetector, Error, IqrDetector, OutlierDetector,
        OutlierDetectorProperties, OutlierMask, Result, ZScoreDetector, DEFAULT_IQR_PROPORTION,
        DEFAULT_ZSCORE_THRESHOLD,
    };
}
