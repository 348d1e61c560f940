//! Interpolation functions
//!
//! Each function maps `x` in `[x_min, x_max]` onto the ordinate range. None of
//! them clamp; wrap a [`crate::Spline`] in [`crate::Clamped`] for that.
//!
//! Knot degeneracy is always checked at [`DEFAULT_TOL`]. Callers working at a
//! coarser tolerance screen their ranges before interpolating.

use breaks_core::{check_not_eq, check_strictly_less_than, Error, Result, DEFAULT_TOL};

/// Blend `y_min` and `y_max` by weight `w`, exact at `w == 0` and `w == 1`.
#[inline]
fn blend(w: f64, y_min: f64, y_max: f64) -> f64 {
    (1.0 - w) * y_min + w * y_max
}

/// Fraction of the way `x` lies from `x_min` to `x_max`.
#[inline]
fn unit_position(x: f64, x_min: f64, x_max: f64) -> Result<f64> {
    check_strictly_less_than(x_min, x_max, DEFAULT_TOL)?;
    Ok((x - x_min) / (x_max - x_min))
}

fn check_base(base: f64) -> Result<()> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(Error::InvalidParameter(format!(
            "spline base must be positive, finite and not 1, got {base}"
        )));
    }
    Ok(())
}

/// Straight-line interpolation between `(x_min, y_min)` and `(x_max, y_max)`.
///
/// `x_mid` is accepted and ignored so every spline shares one calling
/// convention.
///
/// # Examples
///
/// ```rust
/// use breaks_spline::linearly_interpolate;
///
/// assert_eq!(linearly_interpolate(2.5, 0.0, None, 10.0, 0.0, 100.0).unwrap(), 25.0);
/// assert!(linearly_interpolate(1.0, 5.0, None, 5.0, 0.0, 10.0).is_err());
/// ```
pub fn linearly_interpolate(
    x: f64,
    x_min: f64,
    _x_mid: Option<f64>,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) -> Result<f64> {
    let t = unit_position(x, x_min, x_max)?;
    Ok(blend(t, y_min, y_max))
}

/// Linear interpolation carried out in exponential space.
///
/// Grows slowly near `x_min` and quickly near `x_max`; the inverse of
/// [`log_spline`] for the same `base`.
pub fn exp_spline(x: f64, x_min: f64, x_max: f64, y_min: f64, y_max: f64, base: f64) -> Result<f64> {
    check_base(base)?;
    let t = unit_position(x, x_min, x_max)?;
    let w = (base.powf(t) - 1.0) / (base - 1.0);
    Ok(blend(w, y_min, y_max))
}

/// Linear interpolation carried out in logarithmic space.
///
/// Grows quickly near `x_min` and slowly near `x_max`.
pub fn log_spline(x: f64, x_min: f64, x_max: f64, y_min: f64, y_max: f64, base: f64) -> Result<f64> {
    check_base(base)?;
    let t = unit_position(x, x_min, x_max)?;
    let arg = 1.0 + (base - 1.0) * t;
    if arg <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "x = {x} lies outside the domain of the logarithmic spline"
        )));
    }
    let w = arg.ln() / base.ln();
    Ok(blend(w, y_min, y_max))
}

/// The `y_mid` term of the Lagrange quadratic through three control points.
///
/// Zero at `x_min` and `x_max`, `y_mid` at `x_mid`. `y_min` is unused.
pub fn quadratic_mid_spline(
    x: f64,
    x_min: f64,
    x_mid: f64,
    x_max: f64,
    _y_min: f64,
    y_mid: f64,
) -> Result<f64> {
    check_not_eq(x_min, x_mid, DEFAULT_TOL)?;
    check_not_eq(x_mid, x_max, DEFAULT_TOL)?;
    check_not_eq(x_min, x_max, DEFAULT_TOL)?;

    Ok(y_mid * (x - x_min) * (x - x_max) / ((x_mid - x_min) * (x_mid - x_max)))
}

/// Quadratic passing through `(x_min, y_min)`, `(x_mid, y_mid)` and `(x_max, y_max)`.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use breaks_spline::three_point_quad_spline;
///
/// let y = three_point_quad_spline(5.0, 0.0, 5.0, 10.0, 0.0, 200.0, 255.0).unwrap();
/// assert_relative_eq!(y, 200.0);
/// ```
pub fn three_point_quad_spline(
    x: f64,
    x_min: f64,
    x_mid: f64,
    x_max: f64,
    y_min: f64,
    y_mid: f64,
    y_max: f64,
) -> Result<f64> {
    Ok(quadratic_mid_spline(x, x_mid, x_min, x_max, 0.0, y_min)?
        + quadratic_mid_spline(x, x_min, x_mid, x_max, 0.0, y_mid)?
        + quadratic_mid_spline(x, x_min, x_max, x_mid, 0.0, y_max)?)
}
