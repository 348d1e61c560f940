//! Tolerance-aware quantile classification, scanning left to right
//!
//! Boundaries are placed at roughly equal-count positions, but never inside a
//! cluster of values that are equal within `tol`. When a candidate boundary
//! lands in a cluster, the whole cluster is pushed into one class: either the
//! boundary moves past the cluster, the candidate moves before it, or the
//! previous boundary is moved up to the cluster start, whichever displaces the
//! fewest points.

use crate::search::{indexed_highest_strict_lb, indexed_lowest_strict_ub};
use breaks_core::utils::midpoint;
use breaks_core::ClassifyOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Boundaries together with whether the data ran out of distinguishable values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Strictly increasing class boundaries
    pub boundaries: Vec<f64>,
    /// `true` when fewer boundaries were found than requested because no
    /// further distinguishable value was available
    pub exhausted: bool,
}

impl Classification {
    /// Number of classes the boundaries define
    pub fn num_classes(&self) -> usize {
        self.boundaries.len() + 1
    }
}

/// Quantile boundaries for sorted `data` that never split a cluster of
/// near-equal values.
///
/// Returns at most `num_classes - 1` strictly increasing boundaries, each
/// strictly between the data minimum and maximum. When the data runs out of
/// distinguishable values the list is truncated and a warning is logged.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::quantile_l_to_r;
/// use breaks_core::ClassifyOptions;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let breaks = quantile_l_to_r(&data, 3, &ClassifyOptions::default());
/// assert_eq!(breaks, vec![2.5, 4.5]);
///
/// // A run of 5s is never split across classes
/// let data = [1.0, 5.0, 5.0, 5.0, 5.0, 9.0];
/// let breaks = quantile_l_to_r(&data, 2, &ClassifyOptions::default());
/// assert_eq!(breaks, vec![7.0]);
/// ```
pub fn quantile_l_to_r(data: &[f64], num_classes: usize, options: &ClassifyOptions) -> Vec<f64> {
    quantile_l_to_r_report(data, num_classes, options).boundaries
}

/// [`quantile_l_to_r`], also reporting whether the data was exhausted.
pub fn quantile_l_to_r_report(
    data: &[f64],
    num_classes: usize,
    options: &ClassifyOptions,
) -> Classification {
    debug_assert!(breaks_core::utils::is_sorted(data), "data must be sorted");

    let n = data.len();
    let tol = options.tol();
    let mut boundaries: Vec<f64> = Vec::with_capacity(num_classes.saturating_sub(1));
    // Index of the last point of the most recently closed class
    let mut below: Option<usize> = None;
    let mut exhausted = false;

    while num_classes.saturating_sub(boundaries.len()) >= 2 {
        let classes_left = num_classes - boundaries.len();
        let start = below.map_or(0, |b| b + 1);
        let remaining = n.saturating_sub(start);
        let i = start + (remaining / classes_left).max(1) - 1;

        if i + 1 >= n {
            warn!(
                requested = num_classes,
                found = boundaries.len() + 1,
                "ran out of data points before placing every class boundary"
            );
            exhausted = true;
            break;
        }

        let candidate = midpoint(data[i], data[i + 1]);
        if data[i + 1] - candidate > tol {
            boundaries.push(candidate);
            below = Some(i);
            continue;
        }

        // The candidate sits inside a cluster
        let prev = if boundaries.is_empty() { None } else { below };
        let hlb = indexed_highest_strict_lb(data, data[i], i, tol);
        let ub = indexed_lowest_strict_ub(data, data[i + 1], i + 1, tol);

        let move_right = match (prev, hlb) {
            (Some(prev), Some((h, _))) if h > prev => {
                let to_right = ub.map_or(usize::MAX, |(u, _)| u - 1 - i);
                to_right <= i - h
            }
            _ => true,
        };

        if move_right {
            let Some((u, upper)) = ub else {
                warn!(
                    requested = num_classes,
                    found = boundaries.len() + 1,
                    "no distinguishable value above the last cluster"
                );
                exhausted = true;
                break;
            };
            debug!(index = i, moved_to = u - 1, "boundary moved past cluster");
            boundaries.push(midpoint(data[u - 1], upper));
            below = Some(u - 1);
            continue;
        }

        // Only reachable with both a previous boundary and a lower bound
        let (Some(prev), Some((h, lower))) = (prev, hlb) else {
            break;
        };
        let to_cluster_start = midpoint(lower, data[h + 1]);
        let indices_to_move_candidate_l = i - h;
        let indices_to_move_class_bound_r = h - prev;

        if indices_to_move_candidate_l > indices_to_move_class_bound_r {
            debug!(from = prev, to = h, "previous boundary moved up to cluster start");
            if let Some(last) = boundaries.last_mut() {
                *last = to_cluster_start;
            }
        } else {
            debug!(index = i, moved_to = h, "boundary moved before cluster");
            boundaries.push(to_cluster_start);
        }
        below = Some(h);
    }

    Classification {
        boundaries,
        exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ClassifyOptions {
        ClassifyOptions::default()
    }

    #[test]
    fn test_distinct_data_is_plain_quantiles() {
        let data: Vec<f64> = (1..=12).map(f64::from).collect();
        assert_eq!(quantile_l_to_r(&data, 4, &opts()), vec![3.5, 6.5, 9.5]);
        assert_eq!(quantile_l_to_r(&data, 2, &opts()), vec![6.5]);
    }

    #[test]
    fn test_single_class_and_empty() {
        assert!(quantile_l_to_r(&[1.0, 2.0], 1, &opts()).is_empty());
        assert!(quantile_l_to_r(&[1.0, 2.0], 0, &opts()).is_empty());
        let report = quantile_l_to_r_report(&[], 3, &opts());
        assert!(report.boundaries.is_empty());
        assert!(report.exhausted);
    }

    #[test]
    fn test_first_cluster_moves_right() {
        // No previous boundary, so the cluster is pushed into the first class
        let data = [1.0, 2.0, 2.0, 2.0, 2.0, 3.0];
        assert_eq!(quantile_l_to_r(&data, 2, &opts()), vec![2.5]);
    }

    #[test]
    fn test_candidate_moves_left_before_cluster() {
        // Second candidate falls at index 7 in the run of 8s (indices 7..=10);
        // moving left displaces 1 point, moving right 3.
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0, 8.0, 8.0, 9.0];
        let breaks = quantile_l_to_r(&data, 3, &opts());
        assert_eq!(breaks, vec![4.5, 7.5]);
    }

    #[test]
    fn test_previous_boundary_moves_up() {
        // Second candidate lands at index 7 of the run of 7s (indices 5..=11):
        // moving the first boundary up by one point beats moving the
        // candidate down by three or up by four.
        let data = [
            1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 9.0, 10.0, 11.0, 12.0,
        ];
        let breaks = quantile_l_to_r(&data, 4, &opts());
        assert_eq!(breaks, vec![6.0, 8.0, 10.5]);
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let data = [1.0, 1.0, 1.0, 1.0, 2.0];
        let report = quantile_l_to_r_report(&data, 4, &opts());
        assert_eq!(report.boundaries, vec![1.5]);
        assert!(report.exhausted);
        assert_eq!(report.num_classes(), 2);
    }

    #[test]
    fn test_all_equal_has_no_boundaries() {
        let report = quantile_l_to_r_report(&[3.0; 8], 3, &opts());
        assert!(report.boundaries.is_empty());
        assert!(report.exhausted);
    }

    #[test]
    fn test_tolerance_widens_clusters() {
        let data = [1.0, 2.0, 2.0 + 1e-9, 2.0 + 2e-9, 3.0, 4.0];
        let loose = ClassifyOptions::default().with_tol(1e-6);
        let breaks = quantile_l_to_r(&data, 2, &loose);
        assert_eq!(breaks.len(), 1);
        assert!(breaks[0] > 2.0 + 2e-9 && breaks[0] < 3.0);
    }
}
