//! Class break algorithms for choropleth legends
//!
//! This crate turns a sorted data sequence into class boundaries. It covers
//! the classic spacing strategies as well as quantile methods that respect
//! clusters of near-equal values.
//!
//! # Key Features
//!
//! - **Tolerance-aware quantiles**: [`quantile_l_to_r`] never places a boundary
//!   inside a run of values equal within `tol`
//! - **Spike isolation**: [`spike_isolating_quantile`] gives dominant values a
//!   class of their own and apportions the remaining classes with [`pro_rata`]
//! - **Spacing strategies**: equal interval, exponential, logarithmic and
//!   [`geometric`] progressions
//! - **Natural breaks**: [`fisher_jenks`] by exact dynamic programming
//! - **Legends**: [`ClassBounds`] assigns data to classes and labels them
//!
//! # Example
//!
//! ```rust
//! use breaks_classify::{classify, ClassBounds, Strategy};
//! use breaks_core::ClassifyOptions;
//!
//! let data = [1.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0, 10.0];
//! let strategy: Strategy = "quantile".parse().unwrap();
//!
//! let breaks = classify(&data, 3, &strategy, &ClassifyOptions::default()).unwrap();
//! assert_eq!(breaks, vec![4.0, 7.0]);
//!
//! let bounds = ClassBounds::from_sorted(breaks, &data).unwrap();
//! assert_eq!(bounds.counts(&data), vec![3, 6, 2]);
//! ```

pub mod apportion;
pub mod error;
pub mod geometric;
pub mod jenks;
pub mod legend;
pub mod quantile;
pub mod search;
pub mod simple;
pub mod spike;
pub mod spike_isolating;
pub mod strategy;
pub mod traits;

pub use apportion::{pro_rata, ProRata};
pub use error::{Error, Result};
pub use geometric::{geometric, GEOMETRIC_EPSILON};
pub use jenks::fisher_jenks;
pub use legend::ClassBounds;
pub use quantile::{quantile_l_to_r, quantile_l_to_r_report, Classification};
pub use search::{indexed_highest_strict_lb, indexed_lowest_strict_ub};
pub use simple::simple_quantile;
pub use spike::{max_interval_lt_width_w_with_most_data_points, InclusiveInterval};
pub use spike_isolating::spike_isolating_quantile;
pub use strategy::{classify, Strategy, DEFAULT_SPACING_BASE};
pub use traits::{Classifier, StrategyClassifier};
