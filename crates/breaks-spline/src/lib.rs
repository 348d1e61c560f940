//! Interpolation splines for class break legends
//!
//! This crate provides the spline primitives used both to space class breaks
//! evenly (in linear, exponential or logarithmic space) and to map a value onto
//! a colour channel.
//!
//! # Key Features
//!
//! - **Plain functions** mirroring the classic spline set: [`linearly_interpolate`],
//!   [`exp_spline`], [`log_spline`], [`quadratic_mid_spline`], [`three_point_quad_spline`]
//! - **Uniform interface**: every [`SplineKind`] is called through [`Spline::interpolate`]
//! - **Bounds enforcement**: [`enforce_bounds`] clamps inputs to the knot range
//! - **Tuple mapping** for per-channel colour interpolation
//!
//! # Example
//!
//! ```rust
//! use breaks_spline::{map_f_to_three_tuples, enforce_bounds, Knots, SplineKind};
//!
//! let spline = enforce_bounds(SplineKind::ThreePointQuadratic);
//! let knots = Knots::with_mid(0.0, 50.0, 100.0);
//!
//! let rgb = map_f_to_three_tuples(
//!     &spline,
//!     75.0,
//!     &knots,
//!     [0.0, 0.0, 255.0],
//!     [255.0, 255.0, 255.0],
//!     [255.0, 0.0, 0.0],
//! )
//! .unwrap();
//! assert!(rgb[0] > 200.0 && rgb[2] < 200.0);
//! ```

pub mod colour;
pub mod functions;
pub mod spline;
pub mod tuples;

pub use colour::{ColourRamp, Rgb};
pub use functions::{
    exp_spline, linearly_interpolate, log_spline, quadratic_mid_spline, three_point_quad_spline,
};
pub use spline::{clamp_to, enforce_bounds, Clamped, Knots, Ordinates, Spline, SplineKind};
pub use tuples::{map_f_to_three_tuples, map_f_to_tuples};

pub use breaks_core::{Error, Result};
