//! Utility functions for working with data slices

use crate::error::{Error, Result};

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}

/// Whether `data` is non-decreasing and free of NaN
pub fn is_sorted(data: &[f64]) -> bool {
    data.iter().all(|x| !x.is_nan()) && data.windows(2).all(|w| w[0] <= w[1])
}

/// Check that `data` is finite and sorted ascending.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::check_sorted;
///
/// assert!(check_sorted(&[1.0, 1.0, 2.0]).is_ok());
/// assert!(check_sorted(&[2.0, 1.0]).is_err());
/// ```
pub fn check_sorted(data: &[f64]) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("data"));
    }
    match data.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(Error::unsorted(i + 1)),
        None => Ok(()),
    }
}

/// Midpoint of two values
#[inline]
pub fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}

/// First and last elements of sorted data, `None` when empty
pub fn min_max(sorted_data: &[f64]) -> Option<(f64, f64)> {
    Some((*sorted_data.first()?, *sorted_data.last()?))
}
