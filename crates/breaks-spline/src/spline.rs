//! Uniform spline interface
//!
//! [`SplineKind`] is the closed set of interpolation strategies; every variant
//! is called through [`Spline::interpolate`] with the same knot and ordinate
//! arguments, so callers can swap strategies without branching.

use crate::functions::{
    exp_spline, linearly_interpolate, log_spline, quadratic_mid_spline, three_point_quad_spline,
};
use breaks_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Abscissae of the control points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knots {
    pub min: f64,
    pub mid: Option<f64>,
    pub max: f64,
}

impl Knots {
    /// Two-point knots
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, mid: None, max }
    }

    /// Three-point knots
    pub fn with_mid(min: f64, mid: f64, max: f64) -> Self {
        Self {
            min,
            mid: Some(mid),
            max,
        }
    }

    /// The midpoint if set, otherwise the centre of the range
    pub fn mid_or_centre(&self) -> f64 {
        self.mid.unwrap_or(0.5 * (self.min + self.max))
    }
}

/// Ordinates at the control points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ordinates {
    pub min: f64,
    pub mid: Option<f64>,
    pub max: f64,
}

impl Ordinates {
    /// Two-point ordinates
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, mid: None, max }
    }

    /// Three-point ordinates
    pub fn with_mid(min: f64, mid: f64, max: f64) -> Self {
        Self {
            min,
            mid: Some(mid),
            max,
        }
    }
}

/// An interpolation function with the shared calling convention
pub trait Spline {
    /// Interpolated ordinate at `x`
    fn interpolate(&self, x: f64, knots: &Knots, ordinates: &Ordinates) -> Result<f64>;
}

impl<S: Spline + ?Sized> Spline for &S {
    fn interpolate(&self, x: f64, knots: &Knots, ordinates: &Ordinates) -> Result<f64> {
        (**self).interpolate(x, knots, ordinates)
    }
}

/// The available interpolation strategies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplineKind {
    /// Straight line between the outer control points
    Linear,
    /// Linear in exponential space
    Exponential { base: f64 },
    /// Linear in logarithmic space
    Logarithmic { base: f64 },
    /// The middle Lagrange basis term only
    QuadraticMid,
    /// Quadratic through all three control points
    ThreePointQuadratic,
}

impl Default for SplineKind {
    fn default() -> Self {
        Self::Linear
    }
}

fn require_mid(value: Option<f64>, what: &str) -> Result<f64> {
    value.ok_or_else(|| Error::InvalidParameter(format!("{what} is required by this spline")))
}

impl Spline for SplineKind {
    fn interpolate(&self, x: f64, knots: &Knots, ys: &Ordinates) -> Result<f64> {
        match *self {
            Self::Linear => linearly_interpolate(x, knots.min, knots.mid, knots.max, ys.min, ys.max),
            Self::Exponential { base } => exp_spline(x, knots.min, knots.max, ys.min, ys.max, base),
            Self::Logarithmic { base } => log_spline(x, knots.min, knots.max, ys.min, ys.max, base),
            Self::QuadraticMid => quadratic_mid_spline(
                x,
                knots.min,
                require_mid(knots.mid, "x_mid")?,
                knots.max,
                ys.min,
                require_mid(ys.mid, "y_mid")?,
            ),
            Self::ThreePointQuadratic => three_point_quad_spline(
                x,
                knots.min,
                require_mid(knots.mid, "x_mid")?,
                knots.max,
                ys.min,
                require_mid(ys.mid, "y_mid")?,
                ys.max,
            ),
        }
    }
}

/// Clip `x` into `[min, max]` (no-op when the range is inverted).
#[inline]
pub fn clamp_to(x: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return x;
    }
    x.clamp(min, max)
}

/// Spline wrapper that clips inputs to the knot range before delegating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped<S> {
    inner: S,
}

impl<S> Clamped<S> {
    /// Wrap `inner`
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped spline
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Spline> Spline for Clamped<S> {
    fn interpolate(&self, x: f64, knots: &Knots, ordinates: &Ordinates) -> Result<f64> {
        self.inner
            .interpolate(clamp_to(x, knots.min, knots.max), knots, ordinates)
    }
}

/// Clamp inputs of `spline` to its known data range.
///
/// # Examples
///
/// ```rust
/// use breaks_spline::{enforce_bounds, Knots, Ordinates, Spline, SplineKind};
///
/// let spline = enforce_bounds(SplineKind::Linear);
/// let knots = Knots::new(0.0, 10.0);
/// let ys = Ordinates::new(0.0, 1.0);
/// assert_eq!(spline.interpolate(25.0, &knots, &ys).unwrap(), 1.0);
/// assert_eq!(spline.interpolate(-3.0, &knots, &ys).unwrap(), 0.0);
/// ```
pub fn enforce_bounds<S: Spline>(spline: S) -> Clamped<S> {
    Clamped::new(spline)
}
