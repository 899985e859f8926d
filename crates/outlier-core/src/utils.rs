//! Utility functions for working with measurement slices

use num_traits::Float;
use std::cmp::Ordering;

/// Convert a sample size into the float type of the measurements
///
/// Every `usize` fits into `f32`/`f64` (with rounding), so the fallback is
/// only reachable for exotic `Float` implementations.
pub fn sample_size<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use outlier_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Float>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    });
    sorted
}

/// Calculate the arithmetic mean of a slice
///
/// Returns 0.0 for empty slices. Values are summed in slice order; when the
/// sum overflows (finite values near `MAX`), each value is divided by `n`
/// before summing instead.
///
/// # Examples
///
/// ```rust
/// use outlier_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// assert_eq!(mean(&[f64::MAX, f64::MAX]), f64::MAX);
/// ```
pub fn mean<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let n = sample_size::<T>(data.len());
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    if sum.is_finite() || data.iter().any(|x| !x.is_finite()) {
        return sum / n;
    }
    data.iter().fold(T::zero(), |acc, &x| acc + x / n)
}

/// Calculate the population standard deviation (divisor n)
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use outlier_core::utils::population_std_dev;
///
/// let sd = population_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn population_std_dev<T: Float>(data: &[T]) -> T {
    population_std_dev_with_mean(data, mean(data))
}

/// Population standard deviation around a precomputed mean
///
/// Deviations whose squares overflow are rescaled by the largest
/// half-deviation, so any finite sample has a finite standard deviation.
pub fn population_std_dev_with_mean<T: Float>(data: &[T], mean: T) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let n = sample_size::<T>(data.len());
    let sum_sq = data.iter().fold(T::zero(), |acc, &x| {
        let diff = x - mean;
        acc + diff * diff
    });
    let variance = sum_sq / n;
    if variance.is_finite() || !mean.is_finite() || data.iter().any(|x| !x.is_finite()) {
        return variance.sqrt();
    }

    let two = T::one() + T::one();
    let half_mean = mean / two;
    let scale = data
        .iter()
        .fold(T::zero(), |acc, &x| acc.max((x / two - half_mean).abs()));
    let scaled_sq = data.iter().fold(T::zero(), |acc, &x| {
        let diff = (x / two - half_mean) / scale;
        acc + diff * diff
    });
    (scaled_sq / n).sqrt() * scale * two
}

/// `(value - mean) / scale`, halving both terms when the difference overflows
pub fn standardized<T: Float>(value: T, mean: T, scale: T) -> T {
    let diff = value - mean;
    if diff.is_finite() || !value.is_finite() || !mean.is_finite() {
        return diff / scale;
    }
    let two = T::one() + T::one();
    (value / two - mean / two) / scale * two
}

/// True when every value equals the first one
pub fn is_constant<T: Float>(data: &[T]) -> bool {
    match data.first() {
        Some(&first) => data.iter().all(|&x| x == first),
        None => true,
    }
}
