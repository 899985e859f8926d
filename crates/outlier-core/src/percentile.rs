//! Percentiles by linear interpolation between order statistics
//!
//! For percentile `p` of `n` sorted values the fractional rank is
//! `p / 100 * (n - 1)`; the result interpolates linearly between the order
//! statistics at the floor and ceiling of that rank. This is the default
//! definition in most numerical packages (Hyndman & Fan type 7).

use crate::{Error, Result};
use num_traits::Float;

/// Percentile of already sorted data
///
/// `p` is expressed in percent and must lie in `[0, 100]`.
///
/// # Examples
///
/// ```rust
/// use outlier_core::percentile::percentile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_sorted(&data, 25.0).unwrap(), 2.0);
/// assert_eq!(percentile_sorted(&data, 62.5).unwrap(), 3.5);
/// ```
pub fn percentile_sorted<T: Float>(sorted: &[T], p: f64) -> Result<T> {
    if sorted.is_empty() {
        return Err(Error::empty_input());
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "Percentile {p} must be in [0, 100]"
        )));
    }

    let n = sorted.len();
    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (rank.ceil() as usize).min(n - 1);

    let lower = sorted[lo];
    if lo == hi {
        return Ok(lower);
    }

    let fraction = rank - lo as f64;
    let t = T::from(fraction).ok_or_else(|| {
        Error::InvalidParameter(format!("Percentile {p} is not representable"))
    })?;
    Ok(lerp(lower, sorted[hi], t, fraction >= 0.5))
}

/// Interpolate from the nearer endpoint, so `t == 1` lands exactly on `upper`
fn lerp<T: Float>(lower: T, upper: T, t: T, from_upper: bool) -> T {
    let diff = upper - lower;
    if from_upper {
        upper - diff * (T::one() - t)
    } else {
        lower + diff * t
    }
}

/// First and third quartiles (25th and 75th percentiles) of sorted data
pub fn quartiles_sorted<T: Float>(sorted: &[T]) -> Result<(T, T)> {
    Ok((percentile_sorted(sorted, 25.0)?, percentile_sorted(sorted, 75.0)?))
}
