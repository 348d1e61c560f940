//! Tolerance-aware comparisons
//!
//! Every spline and classifier treats two floats closer than `tol` as the
//! same value. These helpers are the single place that rule lives.

use crate::error::{Error, Result};

/// Default equality epsilon, a few ulps above `f64::EPSILON / 2`.
pub const DEFAULT_TOL: f64 = 1.1e-15;

/// Fails unless `a` is less than `b` by more than `tol`.
///
/// # Examples
///
/// ```rust
/// use breaks_core::tolerance::check_strictly_less_than;
///
/// assert!(check_strictly_less_than(0.0, 1.0, 1e-15).is_ok());
/// assert!(check_strictly_less_than(1.0, 1.0, 1e-15).is_err());
/// assert!(check_strictly_less_than(2.0, 1.0, 1e-15).is_err());
/// ```
#[inline]
pub fn check_strictly_less_than(a: f64, b: f64, tol: f64) -> Result<()> {
    // Negated so that NaN on either side is rejected.
    if !(b - a > tol) {
        return Err(Error::DegenerateRange { a, b, tol });
    }
    Ok(())
}

/// Fails when `a` and `b` are within `tol` of each other.
#[inline]
pub fn check_not_eq(a: f64, b: f64, tol: f64) -> Result<()> {
    if !((a - b).abs() > tol) {
        return Err(Error::DegenerateRange {
            a: a.min(b),
            b: a.max(b),
            tol,
        });
    }
    Ok(())
}

/// `true` when `a` and `b` are indistinguishable at tolerance `tol`.
#[inline]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// `true` when `a` is below `b` by more than `tol`.
#[inline]
pub fn strictly_less(a: f64, b: f64, tol: f64) -> bool {
    b - a > tol
}
