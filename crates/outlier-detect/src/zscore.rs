//! Z-score outlier detection
//!
//! Each value is standardized against the sample mean and the population
//! standard deviation (divisor n); a value is an outlier when the absolute
//! Z-score is strictly greater than the threshold.
//!
//! A sample without spread has no defined Z-scores. Instead of letting the
//! division produce NaN, such a sample is reported with no outliers.

use crate::traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
use crate::types::{OutlierMask, ZScoreSummary};
use num_traits::Float;
use outlier_core::utils::{is_constant, mean, population_std_dev_with_mean, sorted};
use outlier_core::{threshold_as, validate_measures, validate_threshold, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument, trace};

/// Absolute Z-score above which a value is flagged when none is given
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 2.5;

/// Z-score detector parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZScoreParameters {
    /// Maximum absolute Z-score of an inlier
    pub threshold: f64,
}

impl Default for ZScoreParameters {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ZSCORE_THRESHOLD,
        }
    }
}

impl ZScoreParameters {
    pub fn validate(&self) -> Result<()> {
        validate_threshold("threshold", self.threshold).map(|_| ())
    }
}

/// Outlier detector based on standardized deviation from the mean
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZScoreDetector {
    params: ZScoreParameters,
}

impl ZScoreDetector {
    /// Create a detector with the given absolute Z-score threshold
    ///
    /// Fails with `InvalidParameter` for negative or non-finite thresholds.
    pub fn new(threshold: f64) -> Result<Self> {
        Self::with_parameters(ZScoreParameters { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.params.threshold
    }

    /// Mean and population standard deviation of a sample
    ///
    /// Both moments are accumulated in ascending value order, so they depend
    /// only on the values and not on their positions: permuting the sample
    /// gives bit-identical statistics. A constant sample reports an exact
    /// zero standard deviation, even when rounding in the mean would leave a
    /// tiny residual.
    pub fn summary<T: Float>(&self, sample: &[T]) -> Result<ZScoreSummary<T>> {
        validate_measures(sample)?;
        let ordered = sorted(sample);
        let mean = mean(&ordered);
        let std_dev = if is_constant(&ordered) {
            T::zero()
        } else {
            population_std_dev_with_mean(&ordered, mean)
        };
        Ok(ZScoreSummary { mean, std_dev })
    }

    /// Z-score of every measurement, in input order
    ///
    /// All zeros when the sample has no spread.
    pub fn zscores<T: Float>(&self, sample: &[T]) -> Result<Vec<T>> {
        let summary = self.summary(sample)?;
        Ok(sample.iter().map(|&x| summary.zscore(x)).collect())
    }
}

impl OutlierDetectorProperties for ZScoreDetector {
    fn algorithm_name(&self) -> &'static str {
        "Z-score"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl<T: Float + Debug> OutlierDetector<T> for ZScoreDetector {
    #[instrument(level = "debug", skip(self, sample), fields(n = sample.len(), threshold = self.params.threshold))]
    fn detect(&self, sample: &[T]) -> Result<OutlierMask> {
        let summary = self.summary(sample)?;
        if !summary.has_spread() {
            trace!(mean = ?summary.mean, "sample has no spread, nothing to flag");
            return Ok(OutlierMask::none(sample.len()));
        }

        let threshold: T = threshold_as("threshold", self.params.threshold)?;
        let mask: OutlierMask = sample
            .iter()
            .map(|&x| summary.zscore(x).abs() > threshold)
            .collect();

        debug!(
            mean = ?summary.mean,
            std_dev = ?summary.std_dev,
            outliers = mask.count(),
            "Z-score classification complete"
        );
        Ok(mask)
    }
}

impl ConfigurableDetector for ZScoreDetector {
    type Parameters = ZScoreParameters;

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

/// Flag values of `measures` whose absolute Z-score exceeds `threshold`
///
/// Returns a mask of the same length as `measures`. A constant sample
/// yields an all-false mask. A `threshold` too large for `T` saturates to
/// `T::max_value()` and flags nothing.
///
/// # Examples
///
/// ```rust
/// use outlier_detect::{zscore_detector, DEFAULT_ZSCORE_THRESHOLD};
///
/// let mut measures = vec![0.0; 19];
/// measures.push(100.0);
/// let mask = zscore_detector(&measures, DEFAULT_ZSCORE_THRESHOLD).unwrap();
/// assert_eq!(mask.indices(), vec![19]);
/// ```
pub fn zscore_detector<T: Float + Debug>(measures: &[T], threshold: f64) -> Result<OutlierMask> {
    ZScoreDetector::new(threshold)?.detect(measures)
}
