//! Classification options
//!
//! An immutable configuration value, constructed per call and passed by
//! reference down through every recursive classifier call.

use crate::error::{Error, Result};
use crate::tolerance::DEFAULT_TOL;
use serde::{Deserialize, Serialize};

/// Multiple of `tol` used for the spike window width when none is given.
pub const DEFAULT_MAX_WIDTH_FACTOR: f64 = 200.0;

/// Options shared by the classifiers.
///
/// # Examples
///
/// ```rust
/// use breaks_core::ClassifyOptions;
///
/// let options = ClassifyOptions::default()
///     .with_tol(1e-9)
///     .with_min_num(5);
///
/// // max_width follows tol until set explicitly
/// assert_eq!(options.max_width(), 200.0 * 1e-9);
/// assert_eq!(options.min_num(), Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyOptions {
    tol: f64,
    max_width: Option<f64>,
    min_num: Option<usize>,
    max_depth: Option<usize>,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            max_width: None,
            min_num: None,
            max_depth: None,
        }
    }
}

impl ClassifyOptions {
    /// Create options with the default tolerance and spike settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the equality/ordering epsilon.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum width of a spike window.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Sets the number of points a window must exceed to count as a spike.
    ///
    /// When unset, each classifier call uses `len(data) / num_classes`.
    pub fn with_min_num(mut self, min_num: usize) -> Self {
        self.min_num = Some(min_num);
        self
    }

    /// Sets the recursion guard for the spike-isolating classifier.
    ///
    /// When unset the guard is the requested class count, which no valid
    /// recursion exceeds.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth.max(1));
        self
    }

    /// Equality/ordering epsilon
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Maximum spike window width; `200 * tol` unless set explicitly
    pub fn max_width(&self) -> f64 {
        self.max_width
            .unwrap_or(DEFAULT_MAX_WIDTH_FACTOR * self.tol)
    }

    /// Explicit spike threshold, if any
    pub fn min_num(&self) -> Option<usize> {
        self.min_num
    }

    /// Spike threshold for a slice of `n` points split into `num_classes`
    pub fn min_num_for(&self, n: usize, num_classes: usize) -> usize {
        self.min_num
            .unwrap_or_else(|| n / num_classes.max(1))
    }

    /// Explicit recursion guard, if any
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Deepest spike-isolation call allowed for a top-level request of `num_classes`
    pub fn depth_limit(&self, num_classes: usize) -> usize {
        self.max_depth.unwrap_or(num_classes).max(1)
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "tol must be finite and non-negative, got {}",
                self.tol
            )));
        }
        let max_width = self.max_width();
        if !max_width.is_finite() || max_width < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "max_width must be finite and non-negative, got {max_width}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClassifyOptions::default();
        assert_eq!(options.tol(), DEFAULT_TOL);
        assert_eq!(options.max_width(), 200.0 * DEFAULT_TOL);
        assert_eq!(options.min_num(), None);
        assert_eq!(options.max_depth(), None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_explicit_max_width_wins() {
        let options = ClassifyOptions::new().with_max_width(0.5).with_tol(1e-3);
        assert_eq!(options.max_width(), 0.5);
    }

    #[test]
    fn test_min_num_for() {
        let options = ClassifyOptions::default();
        assert_eq!(options.min_num_for(11, 3), 3);
        assert_eq!(options.min_num_for(2, 5), 0);
        assert_eq!(options.with_min_num(7).min_num_for(11, 3), 7);
    }

    #[test]
    fn test_max_depth_never_zero() {
        assert_eq!(ClassifyOptions::default().with_max_depth(0).max_depth(), Some(1));
    }

    #[test]
    fn test_depth_limit_follows_class_count() {
        let options = ClassifyOptions::default();
        assert_eq!(options.depth_limit(150), 150);
        assert_eq!(options.depth_limit(0), 1);
        assert_eq!(options.with_max_depth(8).depth_limit(150), 8);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ClassifyOptions::default().with_tol(-1.0).validate().is_err());
        assert!(ClassifyOptions::default().with_tol(f64::NAN).validate().is_err());
        assert!(ClassifyOptions::default()
            .with_max_width(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let options: ClassifyOptions =
            serde_json::from_str(r#"{ "tol": 1e-9, "min_num": 4 }"#).unwrap();
        assert_eq!(options.tol(), 1e-9);
        assert_eq!(options.min_num(), Some(4));
        assert_eq!(options.max_depth(), None);
        assert_eq!(options.max_width(), 200.0 * 1e-9);
    }
}
