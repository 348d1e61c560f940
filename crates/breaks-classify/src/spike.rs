//! Windowed spike detection over a frequency table
//!
//! A spike is the narrowest-looking concentration of data: the window of
//! width at most `w` over the distinct values that contains the most points.

use breaks_core::OrderedCounter;
use serde::{Deserialize, Serialize};

/// A closed interval `[a, b]` of distinct values with its population
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclusiveInterval {
    /// Lowest value in the window
    pub a: f64,
    /// Position of `a` among the distinct values
    pub index_a: usize,
    /// Highest value in the window
    pub b: f64,
    /// Position of `b` among the distinct values
    pub index_b: usize,
    /// Number of data points with a value in `[a, b]`
    pub num_data_points: usize,
}

impl InclusiveInterval {
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Number of distinct values in the window
    pub fn num_keys(&self) -> usize {
        self.index_b - self.index_a + 1
    }
}

/// Find the window of width at most `w` holding the most data points.
///
/// Scans the distinct values with two pointers. Ties keep the earliest
/// window. Returns `None` unless the best window holds strictly more than
/// `min_num` points.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::max_interval_lt_width_w_with_most_data_points;
/// use breaks_core::OrderedCounter;
///
/// let data = [1.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0, 10.0];
/// let counter = OrderedCounter::from_sorted(&data);
///
/// let spike = max_interval_lt_width_w_with_most_data_points(&counter, 3, 1e-13).unwrap();
/// assert_eq!((spike.a, spike.b, spike.num_data_points), (5.0, 5.0, 6));
///
/// assert!(max_interval_lt_width_w_with_most_data_points(&counter, 6, 1e-13).is_none());
/// ```
pub fn max_interval_lt_width_w_with_most_data_points(
    counter: &OrderedCounter,
    min_num: usize,
    w: f64,
) -> Option<InclusiveInterval> {
    let keys = counter.keys();
    let counts = counter.counts();

    let mut best: Option<InclusiveInterval> = None;
    let mut running = 0usize;
    let mut lo = 0usize;

    for hi in 0..keys.len() {
        running += counts[hi];
        while keys[hi] - keys[lo] > w {
            running -= counts[lo];
            lo += 1;
        }
        let best_count = best.map_or(0, |iv| iv.num_data_points);
        if running > best_count {
            best = Some(InclusiveInterval {
                a: keys[lo],
                index_a: lo,
                b: keys[hi],
                index_b: hi,
                num_data_points: running,
            });
        }
    }

    best.filter(|iv| iv.num_data_points > min_num)
}
