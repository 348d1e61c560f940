//! The facade exposes the whole pipeline through its prelude

use approx::assert_relative_eq;
use class_breaks::prelude::*;

#[test]
fn test_prelude_pipeline() {
    let data = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 8.0];
    let bounds = Strategy::Quantile.class_bounds(&data, 3).unwrap();
    assert_eq!(bounds.class_of(0.0), 0);
    assert_eq!(bounds.counts(&data).iter().sum::<usize>(), data.len());
}

#[test]
fn test_config_round_trip() {
    let classifier = Strategy::Logarithmic { base: 2.0 }.with_options(ClassifyOptions::default().with_tol(1e-12));
    let json = serde_json::to_string(&classifier).unwrap();
    let back: StrategyClassifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, classifier);
}

#[test]
fn test_spline_reexports() {
    let spline = enforce_bounds(SplineKind::Linear);
    let y = spline
        .interpolate(15.0, &Knots::new(0.0, 10.0), &Ordinates::new(1.0, 2.0))
        .unwrap();
    assert_relative_eq!(y, 2.0);
    assert!(DEFAULT_TOL > 0.0);
    assert!(!class_breaks::VERSION.is_empty());
}
