//! Error types for class break computation
//!
//! Provides the shared error type for all class-breaks crates.

use thiserror::Error;

/// Core error type for classification and interpolation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two control points coincide (within tolerance) or are out of order
    #[error("Degenerate range: {a} is not strictly less than {b} (tol = {tol:e})")]
    DegenerateRange { a: f64, b: f64, tol: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The data admits no meaningful classification of the requested kind
    #[error("Degenerate classification domain: {0}")]
    DegenerateDomain(String),

    /// Recursive classification went deeper than the configured guard
    #[error("Recursion limit reached at depth {depth}")]
    RecursionLimit { depth: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for data that is not sorted ascending
    pub fn unsorted(index: usize) -> Self {
        Self::InvalidInput(format!(
            "data must be sorted ascending, but element {index} is smaller than its predecessor"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error signals a degenerate range or domain
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateRange { .. } | Self::DegenerateDomain(_))
    }
}
