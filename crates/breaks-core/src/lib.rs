//! Core types for class break computation
//!
//! This crate holds the pieces shared by the spline and classification crates:
//!
//! - [`Error`] / [`Result`]: the error taxonomy
//! - [`tolerance`]: tolerance-aware equality and ordering checks
//! - [`ClassifyOptions`]: the immutable options record passed through every classifier
//! - [`OrderedCounter`]: a sorted `(value, count)` frequency table
//! - [`utils`]: helpers for sorted data slices
//!
//! # Example
//!
//! ```rust
//! use breaks_core::{tolerance::check_strictly_less_than, ClassifyOptions, OrderedCounter};
//!
//! let options = ClassifyOptions::default();
//! assert!(check_strictly_less_than(0.0, 1.0, options.tol()).is_ok());
//!
//! let counter = OrderedCounter::from_sorted(&[1.0, 5.0, 5.0, 5.0, 9.0]);
//! assert_eq!(counter.count_of(5.0), 3);
//! ```

pub mod counter;
pub mod error;
pub mod options;
pub mod tolerance;
pub mod utils;

pub use counter::OrderedCounter;
pub use error::{Error, Result};
pub use options::ClassifyOptions;
pub use tolerance::{check_not_eq, check_strictly_less_than, DEFAULT_TOL};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
