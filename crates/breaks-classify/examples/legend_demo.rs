//! Builds a coloured legend for a zero-inflated sample with every strategy
//!
//! Run with: RUST_LOG=breaks_classify=debug cargo run -p breaks-classify --example legend_demo [strategy]

use anyhow::Context;
use breaks_classify::{Classifier, Strategy, StrategyClassifier};
use breaks_core::ClassifyOptions;
use breaks_spline::{ColourRamp, Rgb};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma};
use tracing_subscriber::EnvFilter;

const NUM_CLASSES: usize = 5;

fn sample() -> anyhow::Result<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let gamma = Gamma::<f64>::new(2.0, 15.0).context("gamma parameters")?;
    let mut data: Vec<f64> = (0..400).map(|_| gamma.sample(&mut rng).round()).collect();
    // A third of the regions report nothing
    data.extend(std::iter::repeat(0.0).take(200));
    Ok(data)
}

fn print_legend(classifier: &StrategyClassifier, data: &[f64], ramp: &ColourRamp) -> anyhow::Result<()> {
    let bounds = classifier
        .class_bounds(data, NUM_CLASSES)
        .with_context(|| format!("classifying with {}", classifier.name()))?;
    let counts = bounds.counts(data);
    let colours = bounds.class_colours(ramp)?;

    println!("=== {} ===", classifier.name());
    for ((tag, count), colour) in bounds.legend_tags(1).iter().zip(&counts).zip(&colours) {
        println!("  {colour}  {tag:<16} {count:>4} regions");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = sample()?;
    let ramp = ColourRamp::diverging(
        Rgb::new(33.0, 102.0, 172.0),
        Rgb::new(247.0, 247.0, 247.0),
        Rgb::new(178.0, 24.0, 43.0),
    );
    let options = ClassifyOptions::default();

    let strategies: Vec<Strategy> = match std::env::args().nth(1) {
        Some(name) => vec![name.parse()?],
        None => Strategy::ALL.to_vec(),
    };

    for strategy in strategies {
        let classifier = strategy.with_options(options);
        if let Err(err) = print_legend(&classifier, &data, &ramp) {
            println!("=== {} ===\n  skipped: {err:#}", classifier.name());
        }
    }
    Ok(())
}
