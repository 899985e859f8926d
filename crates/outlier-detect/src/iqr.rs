//! Interquartile range (IQR) outlier detection
//!
//! Tukey's fences: with Q1 and Q3 the 25th and 75th percentiles and
//! `IQR = Q3 - Q1`, a value is an outlier when it lies strictly above
//! `Q3 + IQR * iqr_proportion` or strictly below `Q1 - IQR * iqr_proportion`.
//!
//! When the central half of the sample is constant the IQR is zero, the fences
//! collapse onto Q1/Q3, and every value that differs from that core is flagged.

use crate::traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
use crate::types::{IqrFences, OutlierMask};
use num_traits::Float;
use outlier_core::utils::sorted;
use outlier_core::{quartiles_sorted, threshold_as, validate_measures, validate_threshold, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Multiplier applied to the IQR when none is given
pub const DEFAULT_IQR_PROPORTION: f64 = 1.5;

/// IQR detector parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IqrParameters {
    /// Multiple of the IQR added above Q3 and subtracted below Q1
    pub iqr_proportion: f64,
}

impl Default for IqrParameters {
    fn default() -> Self {
        Self {
            iqr_proportion: DEFAULT_IQR_PROPORTION,
        }
    }
}

impl IqrParameters {
    pub fn validate(&self) -> Result<()> {
        validate_threshold("iqr_proportion", self.iqr_proportion).map(|_| ())
    }
}

/// Outlier detector based on the interquartile range
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IqrDetector {
    params: IqrParameters,
}

impl IqrDetector {
    /// Create a detector with the given IQR multiplier
    ///
    /// Fails with `InvalidParameter` for negative or non-finite multipliers.
    pub fn new(iqr_proportion: f64) -> Result<Self> {
        Self::with_parameters(IqrParameters { iqr_proportion })
    }

    pub fn iqr_proportion(&self) -> f64 {
        self.params.iqr_proportion
    }

    /// Compute quartiles and fences for a sample
    pub fn fences<T: Float>(&self, sample: &[T]) -> Result<IqrFences<T>> {
        validate_measures(sample)?;
        self.fences_of_sorted(&sorted(sample))
    }

    /// Compute quartiles and fences for pre-sorted data
    ///
    /// `sorted_sample` must be in ascending order; unsorted input yields
    /// meaningless quartiles. Debug builds assert the ordering.
    pub fn fences_sorted<T: Float>(&self, sorted_sample: &[T]) -> Result<IqrFences<T>> {
        validate_measures(sorted_sample)?;
        debug_assert!(
            sorted_sample.windows(2).all(|w| w[0] <= w[1]),
            "fences_sorted requires ascending input"
        );
        self.fences_of_sorted(sorted_sample)
    }

    fn fences_of_sorted<T: Float>(&self, sorted_sample: &[T]) -> Result<IqrFences<T>> {
        let (q1, q3) = quartiles_sorted(sorted_sample)?;
        let proportion = threshold_as("iqr_proportion", self.params.iqr_proportion)?;
        Ok(IqrFences::new(q1, q3, proportion))
    }

    fn classify<T: Float + Debug>(fences: &IqrFences<T>, sample: &[T]) -> OutlierMask {
        let mask: OutlierMask = sample.iter().map(|&x| fences.is_outlier(x)).collect();
        debug!(
            q1 = ?fences.q1,
            q3 = ?fences.q3,
            lower = ?fences.lower,
            upper = ?fences.upper,
            outliers = mask.count(),
            "IQR classification complete"
        );
        mask
    }
}

impl OutlierDetectorProperties for IqrDetector {
    fn algorithm_name(&self) -> &'static str {
        "IQR"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl<T: Float + Debug> OutlierDetector<T> for IqrDetector {
    #[instrument(level = "debug", skip(self, sample), fields(n = sample.len(), iqr_proportion = self.params.iqr_proportion))]
    fn detect(&self, sample: &[T]) -> Result<OutlierMask> {
        let fences = self.fences(sample)?;
        Ok(Self::classify(&fences, sample))
    }

    #[instrument(level = "debug", skip(self, sorted_sample), fields(n = sorted_sample.len(), iqr_proportion = self.params.iqr_proportion))]
    fn detect_sorted(&self, sorted_sample: &[T]) -> Result<OutlierMask> {
        let fences = self.fences_sorted(sorted_sample)?;
        Ok(Self::classify(&fences, sorted_sample))
    }
}

impl ConfigurableDetector for IqrDetector {
    type Parameters = IqrParameters;

    fn with_parameters(params: Self::Parameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }
}

/// Flag values of `measures` outside `iqr_proportion` IQRs from Q1/Q3
///
/// Returns a mask of the same length as `measures`. An `iqr_proportion` too
/// large for `T` saturates to `T::max_value()`, which pushes the fences out
/// to infinity and flags nothing.
///
/// # Examples
///
/// ```rust
/// use outlier_detect::{iqr_detector, DEFAULT_IQR_PROPORTION};
///
/// let measures = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 50.0];
/// let mask = iqr_detector(&measures, DEFAULT_IQR_PROPORTION).unwrap();
/// assert_eq!(mask.indices(), vec![9]);
/// ```
pub fn iqr_detector<T: Float + Debug>(measures: &[T], iqr_proportion: f64) -> Result<OutlierMask> {
    IqrDetector::new(iqr_proportion)?.detect(measures)
}
