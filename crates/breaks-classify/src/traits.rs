//! Core traits for classification

use crate::error::Result;
use crate::legend::ClassBounds;
use crate::strategy::{classify, Strategy};
use breaks_core::utils::sorted;
use breaks_core::ClassifyOptions;
use serde::{Deserialize, Serialize};

/// Trait for computing class boundaries from sample data
pub trait Classifier {
    /// Boundaries for data sorted ascending
    fn boundaries(&self, sorted_data: &[f64], num_classes: usize) -> Result<Vec<f64>>;

    /// Sort `sample`, classify it and wrap the result with the data range.
    ///
    /// Default implementation sorts a copy and calls `boundaries()`.
    fn class_bounds(&self, sample: &[f64], num_classes: usize) -> Result<ClassBounds> {
        let sorted_data = sorted(sample);
        let boundaries = self.boundaries(&sorted_data, num_classes)?;
        Ok(ClassBounds::from_sorted(boundaries, &sorted_data)?)
    }

    /// Name shown to users
    fn name(&self) -> &str;
}

/// A [`Strategy`] bound to the options it runs with
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrategyClassifier {
    pub strategy: Strategy,
    #[serde(default)]
    pub options: ClassifyOptions,
}

impl StrategyClassifier {
    /// Classifier for `strategy` with default options
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            options: ClassifyOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: ClassifyOptions) -> Self {
        self.options = options;
        self
    }
}

impl Classifier for StrategyClassifier {
    fn boundaries(&self, sorted_data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
        classify(sorted_data, num_classes, &self.strategy, &self.options)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

impl Classifier for Strategy {
    fn boundaries(&self, sorted_data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
        classify(sorted_data, num_classes, self, &ClassifyOptions::default())
    }

    fn name(&self) -> &str {
        Strategy::name(self)
    }
}
