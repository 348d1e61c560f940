//! Order-preserving frequency table
//!
//! Summarises a sorted data sequence as `(value, count)` pairs in ascending
//! order. Keys are compared exactly; tolerance is applied by the consumers.

use std::ops::Range;

/// Sorted table of distinct values and their multiplicities
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedCounter {
    keys: Vec<f64>,
    counts: Vec<usize>,
    total: usize,
}

impl OrderedCounter {
    /// Build the table from data sorted ascending.
    ///
    /// Runs of equal values are merged in a single pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use breaks_core::OrderedCounter;
    ///
    /// let counter = OrderedCounter::from_sorted(&[1.0, 2.0, 2.0, 5.0]);
    /// assert_eq!(counter.keys(), &[1.0, 2.0, 5.0]);
    /// assert_eq!(counter.counts(), &[1, 2, 1]);
    /// assert_eq!(counter.total(), 4);
    /// ```
    pub fn from_sorted(data: &[f64]) -> Self {
        debug_assert!(crate::utils::is_sorted(data), "OrderedCounter input must be sorted");

        let mut keys: Vec<f64> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();

        for &value in data {
            match keys.last() {
                Some(&last) if last == value => {
                    if let Some(count) = counts.last_mut() {
                        *count += 1;
                    }
                }
                _ => {
                    keys.push(value);
                    counts.push(1);
                }
            }
        }

        Self {
            keys,
            counts,
            total: data.len(),
        }
    }

    /// Distinct values, ascending
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Multiplicity of each key
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the table holds no values
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of data points summarised
    pub fn total(&self) -> usize {
        self.total
    }

    /// Multiplicity of `value`, zero if absent
    pub fn count_of(&self, value: f64) -> usize {
        self.keys
            .binary_search_by(|k| k.total_cmp(&value))
            .map(|i| self.counts[i])
            .unwrap_or(0)
    }

    /// `(value, count)` pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.keys.iter().copied().zip(self.counts.iter().copied())
    }

    /// Sub-table over a range of key indices.
    ///
    /// For data `d` summarised by this table, the slice of `d` holding exactly
    /// the keys in `range` is summarised by `self.slice(range)`.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let keys = self.keys[range.clone()].to_vec();
        let counts = self.counts[range].to_vec();
        let total = counts.iter().sum();
        Self { keys, counts, total }
    }
}
