//! Core traits for outlier detection
//!
//! Detectors are immutable once built: all state needed for a call lives in
//! the parameters, so the same detector can classify any number of samples,
//! from any number of threads.

use crate::types::OutlierMask;
use num_traits::Float;
use outlier_core::Result;

/// Properties of an outlier detector that don't depend on the sample
pub trait OutlierDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size required for detection
    fn minimum_sample_size(&self) -> usize;
}

/// Classify every value of a one-dimensional sample as outlier or not
pub trait OutlierDetector<T: Float>: OutlierDetectorProperties {
    /// Detect outliers in the given sample
    ///
    /// The returned mask has one entry per measurement, in input order.
    fn detect(&self, sample: &[T]) -> Result<OutlierMask>;

    /// Detect outliers in pre-sorted data
    ///
    /// `sorted_sample` must be in ascending order. Implementations that sort
    /// internally override this to skip the copy, and may return wrong
    /// results for unsorted input.
    fn detect_sorted(&self, sorted_sample: &[T]) -> Result<OutlierMask> {
        self.detect(sorted_sample)
    }
}

/// Detectors whose behaviour is fully described by a parameter struct
pub trait ConfigurableDetector: Sized {
    type Parameters;

    /// Build a detector, validating the parameters
    fn with_parameters(params: Self::Parameters) -> Result<Self>;

    fn parameters(&self) -> &Self::Parameters;

    /// Replace the parameters; the detector is left untouched on error
    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()>;
}
