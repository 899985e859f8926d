//! Types produced by outlier detection

use num_traits::Float;
use outlier_core::utils::standardized;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Boolean outlier flags, positionally aligned with the measurements
///
/// `mask[i]` is `true` iff the i-th measurement was classified as an outlier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutlierMask(Vec<bool>);

impl OutlierMask {
    /// Wrap raw flags
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    /// A mask of `len` entries with nothing flagged
    pub fn none(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// Number of flagged measurements
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }

    /// Whether any measurement was flagged
    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }

    /// Positions of the flagged measurements, ascending
    pub fn indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl Deref for OutlierMask {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.0
    }
}

impl From<OutlierMask> for Vec<bool> {
    fn from(mask: OutlierMask) -> Self {
        mask.0
    }
}

impl FromIterator<bool> for OutlierMask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for OutlierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} outliers among {} measurements", self.count(), self.len())
    }
}

/// Quartiles and Tukey fences computed by the IQR detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrFences<T> {
    /// 25th percentile
    pub q1: T,
    /// 75th percentile
    pub q3: T,
    /// Q3 - Q1
    pub iqr: T,
    /// Q1 - IQR * proportion
    pub lower: T,
    /// Q3 + IQR * proportion
    pub upper: T,
}

impl<T: Float> IqrFences<T> {
    pub fn new(q1: T, q3: T, iqr_proportion: T) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower: q1 - iqr * iqr_proportion,
            upper: q3 + iqr * iqr_proportion,
        }
    }

    /// Values on a fence are not outliers
    pub fn is_outlier(&self, value: T) -> bool {
        value > self.upper || value < self.lower
    }
}

/// Location and scale used for Z-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZScoreSummary<T> {
    pub mean: T,
    /// Population standard deviation (divisor n)
    pub std_dev: T,
}

impl<T: Float> ZScoreSummary<T> {
    /// No spread means no value can be standardized
    pub fn has_spread(&self) -> bool {
        self.std_dev > T::zero()
    }

    /// Standardized deviation of `value`, or zero when there is no spread
    pub fn zscore(&self, value: T) -> T {
        if self.has_spread() {
            standardized(value, self.mean, self.std_dev)
        } else {
            T::zero()
        }
    }
}
