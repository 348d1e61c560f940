//! One-directional scans for the nearest distinguishable value
//!
//! Used to keep class boundaries out of clusters of near-equal values: from a
//! known point, find the closest data point that differs from a reference value
//! by more than `tol`.

use breaks_core::tolerance::strictly_less;

/// Highest data point strictly below `value`, scanning down from `start`.
///
/// Returns the index and value of the first `data[j]` (for `j = start, start-1, ..., 0`)
/// with `value - data[j] > tol`, or `None` if every point down to the start of
/// the data is indistinguishable from `value`.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::indexed_highest_strict_lb;
///
/// let data = [1.0, 2.0, 5.0, 5.0, 5.0];
/// assert_eq!(indexed_highest_strict_lb(&data, 5.0, 4, 1e-15), Some((1, 2.0)));
/// assert_eq!(indexed_highest_strict_lb(&data, 1.0, 4, 1e-15), None);
/// ```
pub fn indexed_highest_strict_lb(data: &[f64], value: f64, start: usize, tol: f64) -> Option<(usize, f64)> {
    if data.is_empty() {
        return None;
    }
    let start = start.min(data.len() - 1);
    data[..=start]
        .iter()
        .rposition(|&x| strictly_less(x, value, tol))
        .map(|j| (j, data[j]))
}

/// Lowest data point strictly above `value`, scanning up from `start`.
///
/// Returns the index and value of the first `data[j]` (for `j = start, start+1, ...`)
/// with `data[j] - value > tol`, or `None` if the rest of the data is
/// indistinguishable from `value`.
pub fn indexed_lowest_strict_ub(data: &[f64], value: f64, start: usize, tol: f64) -> Option<(usize, f64)> {
    data.get(start..)?
        .iter()
        .position(|&x| strictly_less(value, x, tol))
        .map(|offset| (start + offset, data[start + offset]))
}
