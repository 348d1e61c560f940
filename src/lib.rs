//! Class break computation for choropleth legends
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`breaks_core`]: errors, tolerances, [`ClassifyOptions`](breaks_core::ClassifyOptions) and the frequency table
//! - [`breaks_spline`]: interpolation splines and colour ramps
//! - [`breaks_classify`]: the classification strategies and legend helpers
//!
//! # Example
//!
//! ```rust
//! use class_breaks::prelude::*;
//!
//! let data = [1.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0, 10.0];
//! let classifier = Strategy::SpikeIsolating.with_options(ClassifyOptions::default());
//!
//! let bounds = classifier.class_bounds(&data, 3).unwrap();
//! assert_eq!(bounds.legend_tags(1), vec!["< 4.0", "4.0 - 7.0", "> 7.0"]);
//!
//! let ramp = ColourRamp::linear(Rgb::new(255.0, 255.0, 255.0), Rgb::new(0.0, 0.0, 0.0));
//! let colours = bounds.class_colours(&ramp).unwrap();
//! assert_eq!(colours.len(), 3);
//! ```

pub use breaks_classify;
pub use breaks_core;
pub use breaks_spline;

/// Commonly used items
pub mod prelude {
    pub use breaks_classify::{
        classify, ClassBounds, Classification, Classifier, Strategy, StrategyClassifier,
    };
    pub use breaks_core::{ClassifyOptions, OrderedCounter, DEFAULT_TOL};
    pub use breaks_spline::{enforce_bounds, ColourRamp, Knots, Ordinates, Rgb, Spline, SplineKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
