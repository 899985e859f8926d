//! Input and parameter checks shared by the detectors

use crate::{Error, Result};
use num_traits::Float;
use tracing::trace;

/// Check that `measures` is non-empty and holds only finite values
pub fn validate_measures<T: Float>(measures: &[T]) -> Result<()> {
    if measures.is_empty() {
        return Err(Error::empty_input());
    }
    if let Some(index) = measures.iter().position(|x| !x.is_finite()) {
        trace!(index, "rejecting non-finite measurement");
        return Err(Error::non_finite(index));
    }
    Ok(())
}

/// Check that a detector threshold is finite and non-negative
///
/// Negative multipliers would invert the fences, so they are treated as a
/// configuration mistake rather than accepted silently.
pub fn validate_threshold(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_threshold(name, value));
    }
    Ok(value)
}

/// Convert a validated threshold into the measurement float type
///
/// Finite values beyond the range of `T` saturate to `T::max_value()` (or
/// `T::min_value()`), so an `f64` multiplier of `1e300` applied to `f32`
/// samples flags nothing rather than failing.
pub fn threshold_as<T: Float>(name: &str, value: f64) -> Result<T> {
    if !value.is_finite() {
        return Err(Error::invalid_threshold(name, value));
    }
    match T::from(value) {
        Some(v) if v.is_finite() => Ok(v),
        _ if value < 0.0 => Ok(T::min_value()),
        _ => Ok(T::max_value()),
    }
}
