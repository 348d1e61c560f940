//! Element-wise spline application across parallel tuples
//!
//! Colour ramps interpolate each channel independently; these helpers run one
//! spline per channel over arrays of equal arity.

use crate::spline::{Knots, Ordinates, Spline};
use breaks_core::Result;

/// Apply a two-point spline to each channel of `mins`/`maxs`.
///
/// # Examples
///
/// ```rust
/// use breaks_spline::{map_f_to_tuples, Knots, SplineKind};
///
/// let rgb = map_f_to_tuples(
///     &SplineKind::Linear,
///     5.0,
///     &Knots::new(0.0, 10.0),
///     [0.0, 100.0, 200.0],
///     [100.0, 100.0, 0.0],
/// )
/// .unwrap();
/// assert_eq!(rgb, [50.0, 100.0, 100.0]);
/// ```
pub fn map_f_to_tuples<S: Spline, const N: usize>(
    spline: &S,
    x: f64,
    knots: &Knots,
    mins: [f64; N],
    maxs: [f64; N],
) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = spline.interpolate(x, knots, &Ordinates::new(mins[i], maxs[i]))?;
    }
    Ok(out)
}

/// Apply a three-point spline to each channel of `mins`/`mids`/`maxs`.
pub fn map_f_to_three_tuples<S: Spline, const N: usize>(
    spline: &S,
    x: f64,
    knots: &Knots,
    mins: [f64; N],
    mids: [f64; N],
    maxs: [f64; N],
) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = spline.interpolate(x, knots, &Ordinates::with_mid(mins[i], mids[i], maxs[i]))?;
    }
    Ok(out)
}
