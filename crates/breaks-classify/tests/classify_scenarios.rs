//! End-to-end classification scenarios

mod common;

use approx::assert_relative_eq;
use breaks_classify::{
    classify, geometric, quantile_l_to_r, quantile_l_to_r_report, spike_isolating_quantile,
    ClassBounds, Classifier, Error, Strategy, StrategyClassifier,
};
use breaks_core::utils::midpoint;
use breaks_core::ClassifyOptions;
use breaks_spline::{ColourRamp, Rgb};
use common::*;

#[test]
fn test_spike_is_isolated() {
    let data = spiked();
    let breaks = spike_isolating_quantile(&data, 3, &ClassifyOptions::default()).unwrap();
    assert_eq!(breaks, vec![4.0, 7.0]);

    let bounds = ClassBounds::from_sorted(breaks, &data).unwrap();
    assert_eq!(bounds.counts(&data), vec![3, 6, 2]);
}

#[test]
fn test_geometric_rejects_constant_data() {
    let err = geometric(&[5.0, 5.0, 5.0, 5.0], 3).unwrap_err();
    assert!(err.is_degenerate());

    let err = classify(&[5.0, 5.0, 5.0, 5.0], 3, &Strategy::Geometric, &ClassifyOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Core(_)));
}

#[test]
fn test_run_spanning_several_candidates() {
    // Ten zeros would hold the first two equal-count boundaries
    let mut data = vec![0.0; 10];
    data.extend(ramp(10));
    let options = ClassifyOptions::default();

    let expected = vec![0.5, 2.5, 4.5, 7.5];
    assert_eq!(quantile_l_to_r(&data, 5, &options), expected);
    assert_eq!(spike_isolating_quantile(&data, 5, &options).unwrap(), expected);
}

#[test]
fn test_classification_is_deterministic() {
    let data = skewed_rounded(500, 7);
    let options = ClassifyOptions::default();
    for strategy in Strategy::ALL {
        let first = classify(&data, 6, &strategy, &options);
        let second = classify(&data, 6, &strategy, &options);
        assert_eq!(first, second, "{strategy}");
    }
}

#[test]
fn test_zero_inflated_data() {
    let data = zero_inflated(200, 100, 42);
    let options = ClassifyOptions::default();
    let first_positive = data.iter().copied().find(|&x| x > 0.0).unwrap();

    for strategy in [Strategy::Quantile, Strategy::SpikeIsolating, Strategy::FisherJenks] {
        let breaks = classify(&data, 5, &strategy, &options).unwrap();
        assert_valid_boundaries(&data, &breaks, 5);
        assert_eq!(breaks.len(), 4, "{strategy}");
    }

    // The zeros form a class of their own
    let breaks = classify(&data, 5, &Strategy::SpikeIsolating, &options).unwrap();
    assert_relative_eq!(breaks[0], midpoint(0.0, first_positive));
    let bounds = ClassBounds::from_sorted(breaks, &data).unwrap();
    assert_eq!(bounds.counts(&data)[0], 100);
}

#[test]
fn test_spacing_strategies_are_valid() {
    let data = skewed_rounded(300, 3);
    let options = ClassifyOptions::default();
    for strategy in [
        Strategy::EqualInterval,
        Strategy::Exponential { base: 10.0 },
        Strategy::Logarithmic { base: 10.0 },
        Strategy::Exponential { base: 2.0 },
    ] {
        let breaks = classify(&data, 7, &strategy, &options).unwrap();
        assert_eq!(breaks.len(), 6, "{strategy}");
        assert_valid_boundaries(&data, &breaks, 7);
    }
}

#[test]
fn test_tolerance_merges_close_values() {
    let data = [1.0, 2.0, 3.0, 3.0004, 3.0008, 3.0012, 9.0, 10.0];
    let loose = ClassifyOptions::default().with_tol(1e-3);
    let breaks = quantile_l_to_r(&data, 2, &loose);
    assert_eq!(breaks.len(), 1);
    assert_relative_eq!(breaks[0], midpoint(3.0012, 9.0));

    // With the default tolerance the values are distinct
    let breaks = quantile_l_to_r(&data, 2, &ClassifyOptions::default());
    assert_relative_eq!(breaks[0], midpoint(3.0004, 3.0008));
}

#[test]
fn test_many_classes_on_rounded_data() {
    let data = skewed_rounded(600, 3);
    let options = ClassifyOptions::default();
    for num_classes in [64, 150, 1000] {
        let breaks = classify(&data, num_classes, &Strategy::SpikeIsolating, &options).unwrap();
        assert_valid_boundaries(&data, &breaks, num_classes);
    }
}

#[test]
fn test_exhaustion_returns_partial_result() {
    let data = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
    let report = quantile_l_to_r_report(&data, 5, &ClassifyOptions::default());
    assert_eq!(report.boundaries, vec![1.5]);
    assert!(report.exhausted);
}

#[test]
fn test_legend_pipeline() {
    let sample = zero_inflated(80, 20, 9);
    let classifier = StrategyClassifier::new("quantile".parse().unwrap());
    let bounds = classifier.class_bounds(&sample, 4).unwrap();

    let counts = bounds.counts(&sample);
    assert_eq!(counts.iter().sum::<usize>(), sample.len());
    assert_eq!(bounds.legend_tags(1).len(), bounds.class_count());

    let ramp = ColourRamp::diverging(
        Rgb::new(0.0, 0.0, 255.0),
        Rgb::new(255.0, 255.0, 255.0),
        Rgb::new(255.0, 0.0, 0.0),
    );
    let colours = bounds.colours(&sample, &ramp).unwrap();
    assert_eq!(colours.len(), sample.len());
    let palette = bounds.class_colours(&ramp).unwrap();
    assert_eq!(palette.len(), bounds.class_count());
}

#[test]
fn test_configuration_from_json() {
    let json = r#"{
        "strategy": { "strategy": "spike_isolating" },
        "options": { "tol": 1e-12, "min_num": 2, "max_depth": 8 }
    }"#;
    let classifier: StrategyClassifier = serde_json::from_str(json).unwrap();
    assert_eq!(classifier.options.min_num(), Some(2));
    assert_eq!(classifier.options.max_depth(), Some(8));
    let breaks = classifier.boundaries(&spiked(), 3).unwrap();
    assert_eq!(breaks, vec![4.0, 7.0]);
}

#[test]
fn test_unsorted_input_is_rejected() {
    let err = classify(&[3.0, 1.0, 2.0], 2, &Strategy::Quantile, &ClassifyOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("sorted"));
}
