//! Colour ramps for legends
//!
//! A [`ColourRamp`] maps a value in a known range onto an RGB colour by
//! running a spline per channel. Inputs are always clamped to the knot range.

use crate::spline::{enforce_bounds, Knots, SplineKind};
use crate::tuples::{map_f_to_three_tuples, map_f_to_tuples};
use breaks_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB colour with floating point channels, nominally in `0.0..=255.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f64; 3]);

impl Rgb {
    /// Construct from channel values
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    /// Channels rounded and clipped to bytes
    pub fn to_u8(&self) -> [u8; 3] {
        self.0.map(|c| c.round().clamp(0.0, 255.0) as u8)
    }

    pub fn channels(&self) -> [f64; 3] {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Value-to-colour mapping for a legend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColourRamp {
    pub spline: SplineKind,
    pub low: Rgb,
    pub mid: Option<Rgb>,
    pub high: Rgb,
}

impl ColourRamp {
    /// Two-colour linear ramp
    pub fn linear(low: Rgb, high: Rgb) -> Self {
        Self {
            spline: SplineKind::Linear,
            low,
            mid: None,
            high,
        }
    }

    /// Three-colour ramp through `mid` using the three-point quadratic spline
    pub fn diverging(low: Rgb, mid: Rgb, high: Rgb) -> Self {
        Self {
            spline: SplineKind::ThreePointQuadratic,
            low,
            mid: Some(mid),
            high,
        }
    }

    /// Replace the spline
    pub fn with_spline(mut self, spline: SplineKind) -> Self {
        self.spline = spline;
        self
    }

    /// Colour for `x` given the data range `[x_min, x_max]`.
    ///
    /// Three-point splines use `x_mid`, defaulting to the centre of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use breaks_spline::{ColourRamp, Rgb};
    ///
    /// let ramp = ColourRamp::linear(Rgb::new(0.0, 0.0, 0.0), Rgb::new(255.0, 255.0, 255.0));
    /// let grey = ramp.colour(5.0, 0.0, None, 10.0).unwrap();
    /// assert_eq!(grey.to_u8(), [128, 128, 128]);
    /// ```
    pub fn colour(&self, x: f64, x_min: f64, x_mid: Option<f64>, x_max: f64) -> Result<Rgb> {
        let spline = enforce_bounds(self.spline);
        let channels = match (self.spline, self.mid) {
            (SplineKind::QuadraticMid | SplineKind::ThreePointQuadratic, mid) => {
                let knots = Knots::new(x_min, x_max);
                let knots = Knots::with_mid(x_min, x_mid.unwrap_or(knots.mid_or_centre()), x_max);
                let mid = mid.unwrap_or_else(|| self.midpoint_colour());
                map_f_to_three_tuples(&spline, x, &knots, self.low.0, mid.0, self.high.0)?
            }
            _ => map_f_to_tuples(&spline, x, &Knots::new(x_min, x_max), self.low.0, self.high.0)?,
        };
        Ok(Rgb(channels))
    }

    fn midpoint_colour(&self) -> Rgb {
        let [r0, g0, b0] = self.low.0;
        let [r1, g1, b1] = self.high.0;
        Rgb::new(0.5 * (r0 + r1), 0.5 * (g0 + g1), 0.5 * (b0 + b1))
    }
}
