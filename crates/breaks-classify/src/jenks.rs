//! Fisher–Jenks natural breaks
//!
//! Exact dynamic programming over the distinct values of the data, weighted
//! by their multiplicities, minimising the within-class sum of squared
//! deviations. Working on distinct values means a run of equal values can
//! never be split between two classes.

use breaks_core::utils::midpoint;
use breaks_core::{Error, OrderedCounter, Result};
use tracing::{debug, instrument};

/// Weighted prefix sums for O(1) sum-of-squares over key ranges
struct PrefixSums {
    weight: Vec<f64>,
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
}

impl PrefixSums {
    fn new(counter: &OrderedCounter) -> Self {
        let keys = counter.keys();
        // Shift by the median key to limit cancellation
        let shift = keys[keys.len() / 2];
        let len = keys.len() + 1;
        let mut sums = Self {
            weight: Vec::with_capacity(len),
            sum: Vec::with_capacity(len),
            sum_sq: Vec::with_capacity(len),
        };
        let (mut w, mut s, mut s2) = (0.0, 0.0, 0.0);
        sums.push(w, s, s2);
        for (key, count) in counter.iter() {
            let c = count as f64;
            let x = key - shift;
            w += c;
            s += c * x;
            s2 += c * x * x;
            sums.push(w, s, s2);
        }
        sums
    }

    fn push(&mut self, w: f64, s: f64, s2: f64) {
        self.weight.push(w);
        self.sum.push(s);
        self.sum_sq.push(s2);
    }

    /// Sum of squared deviations of keys `i..=j`
    #[inline]
    fn ssd(&self, i: usize, j: usize) -> f64 {
        let w = self.weight[j + 1] - self.weight[i];
        let s = self.sum[j + 1] - self.sum[i];
        let s2 = self.sum_sq[j + 1] - self.sum_sq[i];
        (s2 - s * s / w).max(0.0)
    }
}

/// Natural breaks for sorted `data` into at most `num_classes` classes.
///
/// Returns the midpoints between the largest value of each class and the
/// smallest value of the next. The class count is reduced to the number of
/// distinct values.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::fisher_jenks;
///
/// let data = [1.0, 1.1, 1.2, 5.0, 5.1, 9.0, 9.2];
/// let breaks = fisher_jenks(&data, 3).unwrap();
/// assert!((breaks[0] - 3.1).abs() < 1e-12);
/// assert!((breaks[1] - 7.05).abs() < 1e-12);
/// ```
#[instrument(skip(data), fields(n = data.len()))]
pub fn fisher_jenks(data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }
    let counter = OrderedCounter::from_sorted(data);
    let keys = counter.keys();
    let d = keys.len();
    let k = num_classes.min(d);
    if k <= 1 {
        return Ok(Vec::new());
    }

    let sums = PrefixSums::new(&counter);

    // cost[c][j]: least SSD of keys[0..=j] split into c + 1 classes
    // start[c][j]: first key of the last of those classes
    let mut cost = vec![vec![f64::INFINITY; d]; k];
    let mut start = vec![vec![0usize; d]; k];
    for j in 0..d {
        cost[0][j] = sums.ssd(0, j);
    }
    for c in 1..k {
        for j in c..d {
            for i in c..=j {
                let candidate = cost[c - 1][i - 1] + sums.ssd(i, j);
                if candidate < cost[c][j] {
                    cost[c][j] = candidate;
                    start[c][j] = i;
                }
            }
        }
    }
    debug!(classes = k, ssd = cost[k - 1][d - 1], "fisher-jenks optimum");

    let mut starts = Vec::with_capacity(k - 1);
    let mut j = d - 1;
    for c in (1..k).rev() {
        let i = start[c][j];
        starts.push(i);
        j = i - 1;
    }
    starts.reverse();

    Ok(starts
        .into_iter()
        .map(|i| midpoint(keys[i - 1], keys[i]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_clear_groups() {
        let data = [1.0, 1.1, 1.2, 5.0, 5.1, 9.0, 9.2];
        let breaks = fisher_jenks(&data, 3).unwrap();
        assert_relative_eq!(breaks[0], 3.1, epsilon = 1e-12);
        assert_relative_eq!(breaks[1], 7.05, epsilon = 1e-12);
    }

    #[test]
    fn test_duplicates_are_never_split() {
        let data = [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 3.0];
        let breaks = fisher_jenks(&data, 3).unwrap();
        assert_eq!(breaks, vec![1.5, 2.5]);
    }

    #[test]
    fn test_class_count_reduced_to_distinct_values() {
        let data = [1.0, 1.0, 4.0, 4.0];
        assert_eq!(fisher_jenks(&data, 5).unwrap(), vec![2.5]);
        assert!(fisher_jenks(&[3.0, 3.0], 4).unwrap().is_empty());
    }

    #[test]
    fn test_weights_pull_breaks() {
        // Heavy mass at 10 keeps 9 with it rather than with 0
        let mut data = vec![0.0, 9.0];
        data.extend([10.0; 20]);
        assert_eq!(fisher_jenks(&data, 2).unwrap(), vec![4.5]);
    }

    #[test]
    fn test_empty_is_error() {
        assert!(fisher_jenks(&[], 2).is_err());
    }
}
