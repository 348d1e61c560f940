//! Class boundaries applied to data: assignment, counts and legend labels

use breaks_core::utils::{midpoint, min_max};
use breaks_core::{Error, Result};
use breaks_spline::{ColourRamp, Rgb};
use serde::{Deserialize, Serialize};

/// Boundaries together with the range of the data they classify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBounds {
    boundaries: Vec<f64>,
    min: f64,
    max: f64,
}

impl ClassBounds {
    /// Wrap strictly increasing `boundaries` for data in `[min, max]`.
    pub fn new(boundaries: Vec<f64>, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidParameter(format!(
                "data range [{min}, {max}] is not a finite interval"
            )));
        }
        if boundaries.iter().any(|b| !b.is_finite()) {
            return Err(Error::non_finite("boundaries"));
        }
        if let Some(i) = boundaries.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(format!(
                "boundaries must be strictly increasing, but element {} is not",
                i + 1
            )));
        }
        Ok(Self { boundaries, min, max })
    }

    /// Wrap `boundaries` computed for sorted `data`
    pub fn from_sorted(boundaries: Vec<f64>, sorted_data: &[f64]) -> Result<Self> {
        let (min, max) = min_max(sorted_data).ok_or_else(Error::empty_input)?;
        Self::new(boundaries, min, max)
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of classes, one more than the number of boundaries
    pub fn class_count(&self) -> usize {
        self.boundaries.len() + 1
    }

    /// Index of the class holding `value`.
    ///
    /// A value equal to a boundary belongs to the class above it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use breaks_classify::ClassBounds;
    ///
    /// let bounds = ClassBounds::new(vec![4.0, 7.0], 1.0, 10.0).unwrap();
    /// assert_eq!(bounds.class_of(3.0), 0);
    /// assert_eq!(bounds.class_of(4.0), 1);
    /// assert_eq!(bounds.class_of(10.0), 2);
    /// ```
    pub fn class_of(&self, value: f64) -> usize {
        self.boundaries.partition_point(|&b| b <= value)
    }

    /// Class index for every value in `data`
    pub fn assign(&self, data: &[f64]) -> Vec<usize> {
        data.iter().map(|&x| self.class_of(x)).collect()
    }

    /// Number of values of `data` in each class
    pub fn counts(&self, data: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.class_count()];
        for &x in data {
            counts[self.class_of(x)] += 1;
        }
        counts
    }

    /// `(lower, upper)` edges of each class, with the data range closing the
    /// outer classes
    pub fn intervals(&self) -> Vec<(f64, f64)> {
        let edges: Vec<f64> = std::iter::once(self.min)
            .chain(self.boundaries.iter().copied())
            .chain(std::iter::once(self.max))
            .collect();
        edges.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Centre of each class interval
    pub fn midpoints(&self) -> Vec<f64> {
        self.intervals()
            .into_iter()
            .map(|(lo, hi)| midpoint(lo, hi))
            .collect()
    }

    /// Human-readable label per class, values shown with `precision` decimals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use breaks_classify::ClassBounds;
    ///
    /// let bounds = ClassBounds::new(vec![3.0, 5.0], 1.0, 9.0).unwrap();
    /// assert_eq!(bounds.legend_tags(2), vec!["< 3.00", "3.00 - 5.00", "> 5.00"]);
    /// ```
    pub fn legend_tags(&self, precision: usize) -> Vec<String> {
        let p = precision;
        let n = self.boundaries.len();
        if n == 0 {
            return vec![format!("{:.p$} - {:.p$}", self.min, self.max)];
        }
        let mut tags = Vec::with_capacity(n + 1);
        tags.push(format!("< {:.p$}", self.boundaries[0]));
        for w in self.boundaries.windows(2) {
            tags.push(format!("{:.p$} - {:.p$}", w[0], w[1]));
        }
        tags.push(format!("> {:.p$}", self.boundaries[n - 1]));
        tags
    }

    /// Colour for each class, taken at the class midpoint
    pub fn class_colours(&self, ramp: &ColourRamp) -> Result<Vec<Rgb>> {
        self.midpoints()
            .into_iter()
            .map(|x| ramp.colour(x, self.min, None, self.max))
            .collect()
    }

    /// Colour for every value in `data`, by class
    pub fn colours(&self, data: &[f64], ramp: &ColourRamp) -> Result<Vec<Rgb>> {
        let palette = self.class_colours(ramp)?;
        Ok(data.iter().map(|&x| palette[self.class_of(x)]).collect())
    }
}
