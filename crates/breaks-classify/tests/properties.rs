//! Property-based tests for the classifiers
//!
//! Boundaries must be strictly increasing, strictly inside the data range and
//! never more than `num_classes - 1`; equal values must never land in
//! different classes.

mod common;

use breaks_classify::{
    fisher_jenks, pro_rata, quantile_l_to_r, spike_isolating_quantile, ClassBounds,
};
use breaks_core::{utils, ClassifyOptions};
use common::assert_valid_boundaries;
use proptest::prelude::*;

fn sorted_data() -> impl Strategy<Value = Vec<f64>> {
    // Coarse grid so that long runs of repeated values are common
    prop::collection::vec(0i32..15, 1..120)
        .prop_map(|v| utils::sorted(&v.into_iter().map(f64::from).collect::<Vec<_>>()))
}

fn equal_values_share_a_class(data: &[f64], breaks: Vec<f64>) -> bool {
    let bounds = match ClassBounds::from_sorted(breaks, data) {
        Ok(bounds) => bounds,
        Err(_) => return false,
    };
    let classes = bounds.assign(data);
    data.windows(2)
        .zip(classes.windows(2))
        .all(|(d, c)| d[0] != d[1] || c[0] == c[1])
}

proptest! {
    #[test]
    fn prop_quantile_boundaries_valid(data in sorted_data(), m in 1usize..10) {
        let breaks = quantile_l_to_r(&data, m, &ClassifyOptions::default());
        assert_valid_boundaries(&data, &breaks, m);
        prop_assert!(equal_values_share_a_class(&data, breaks));
    }

    #[test]
    fn prop_spike_isolating_boundaries_valid(data in sorted_data(), m in 1usize..10) {
        let breaks = spike_isolating_quantile(&data, m, &ClassifyOptions::default()).unwrap();
        assert_valid_boundaries(&data, &breaks, m);
        prop_assert!(equal_values_share_a_class(&data, breaks));
    }

    #[test]
    fn prop_fisher_jenks_boundaries_valid(data in sorted_data(), m in 1usize..8) {
        let breaks = fisher_jenks(&data, m).unwrap();
        assert_valid_boundaries(&data, &breaks, m);
        prop_assert!(equal_values_share_a_class(&data, breaks));
    }

    #[test]
    fn prop_counts_cover_data(data in sorted_data(), m in 1usize..10) {
        let breaks = spike_isolating_quantile(&data, m, &ClassifyOptions::default()).unwrap();
        let bounds = ClassBounds::from_sorted(breaks, &data).unwrap();
        let counts = bounds.counts(&data);
        prop_assert_eq!(counts.len(), bounds.class_count());
        prop_assert_eq!(counts.iter().sum::<usize>(), data.len());
    }

    #[test]
    fn prop_pro_rata_spends_whole_budget(n in 0usize..60, w_1 in 0usize..1000, w_2 in 1usize..1000) {
        let (a, b) = pro_rata(n, w_1, w_2).unwrap();
        prop_assert_eq!(a + b, n);
        if n >= 2 && w_1 > 0 {
            prop_assert!(a >= 1 && b >= 1);
        }
    }

    #[test]
    fn prop_pro_rata_float_is_proportional(n in 0.0f64..100.0, w_1 in 0.0f64..1e6, w_2 in 1.0f64..1e6) {
        let (a, b) = pro_rata(n, w_1, w_2).unwrap();
        prop_assert!((a + b - n).abs() <= 1e-9 * n.max(1.0));
        prop_assert!(a >= 0.0 && b >= 0.0);
    }
}
