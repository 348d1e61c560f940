//! Classification strategies and the `classify` entry point

use crate::error::{Error, Result};
use crate::geometric::geometric;
use crate::jenks::fisher_jenks;
use crate::quantile::quantile_l_to_r;
use crate::simple::simple_quantile;
use crate::spike_isolating::spike_isolating_quantile;
use breaks_core::tolerance::approx_eq;
use breaks_core::utils::{check_sorted, min_max};
use breaks_core::{ClassifyOptions, DEFAULT_TOL};
use breaks_spline::{Knots, Ordinates, Spline, SplineKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Base used for the exponential and logarithmic strategies when parsed by name
pub const DEFAULT_SPACING_BASE: f64 = 10.0;

/// How class boundaries are chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    /// Equal-width classes over the data range
    EqualInterval,
    /// Classes growing exponentially in width
    Exponential { base: f64 },
    /// Classes shrinking logarithmically in width
    Logarithmic { base: f64 },
    /// Equal number of points per class, ignoring duplicates
    EqualCount,
    /// Tolerance-aware quantiles that never split a cluster
    Quantile,
    /// Quantiles with dominant values isolated into their own classes
    SpikeIsolating,
    /// Geometric progression of boundaries
    Geometric,
    /// Natural breaks minimising within-class variance
    FisherJenks,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::SpikeIsolating
    }
}

impl Strategy {
    /// Every strategy, exponential and logarithmic with the default base
    pub const ALL: [Strategy; 8] = [
        Self::EqualInterval,
        Self::Exponential {
            base: DEFAULT_SPACING_BASE,
        },
        Self::Logarithmic {
            base: DEFAULT_SPACING_BASE,
        },
        Self::EqualCount,
        Self::Quantile,
        Self::SpikeIsolating,
        Self::Geometric,
        Self::FisherJenks,
    ];

    /// Display name, as shown in strategy pickers
    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualInterval => "Equal Interval",
            Self::Exponential { .. } => "Exponential (inverse log)",
            Self::Logarithmic { .. } => "Logarithmic scale",
            Self::EqualCount => "equal number of members",
            Self::Quantile => "quantile left to right",
            Self::SpikeIsolating => "quantile",
            Self::Geometric => "geometric",
            Self::FisherJenks => "fisher_jenks",
        }
    }

    /// Pair with options for use as a [`Classifier`](crate::Classifier)
    pub fn with_options(self, options: ClassifyOptions) -> crate::StrategyClassifier {
        crate::StrategyClassifier::new(self).with_options(options)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parse a display name or a common alias, ignoring case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use breaks_classify::Strategy;
    ///
    /// assert_eq!("quantile".parse::<Strategy>().unwrap(), Strategy::SpikeIsolating);
    /// assert_eq!("Equal Interval".parse::<Strategy>().unwrap(), Strategy::EqualInterval);
    /// assert!("median cut".parse::<Strategy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        let strategy = match normalized.as_str() {
            "equal interval" => Self::EqualInterval,
            "exponential (inverse log)" | "exponential" => Self::Exponential {
                base: DEFAULT_SPACING_BASE,
            },
            "logarithmic scale" | "logarithmic" => Self::Logarithmic {
                base: DEFAULT_SPACING_BASE,
            },
            "equal number of members" | "equal count" => Self::EqualCount,
            "quantile left to right" | "quantile l to r" => Self::Quantile,
            "quantile" | "spike isolating quantile" | "spike isolating" => Self::SpikeIsolating,
            "geometric" => Self::Geometric,
            "fisher jenks" | "natural breaks" => Self::FisherJenks,
            _ => return Err(Error::UnknownStrategy(s.to_string())),
        };
        Ok(strategy)
    }
}

/// Class boundaries for sorted `data` using `strategy`.
///
/// Validates the options, the data ordering and the class count, then
/// dispatches. At most `num_classes - 1` strictly increasing boundaries are
/// returned.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::{classify, Strategy};
/// use breaks_core::ClassifyOptions;
///
/// let data = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
/// let breaks = classify(&data, 5, &Strategy::EqualInterval, &ClassifyOptions::default()).unwrap();
/// assert_eq!(breaks, vec![2.0, 4.0, 6.0, 8.0]);
/// ```
#[instrument(skip(data, options), fields(n = data.len(), strategy = %strategy))]
pub fn classify(
    data: &[f64],
    num_classes: usize,
    strategy: &Strategy,
    options: &ClassifyOptions,
) -> Result<Vec<f64>> {
    options.validate()?;
    Error::check_num_classes(num_classes)?;
    check_sorted(data)?;
    if data.is_empty() {
        return Err(breaks_core::Error::empty_input().into());
    }

    let breaks = match *strategy {
        Strategy::EqualInterval => spaced_breaks(data, num_classes, SplineKind::Linear, options)?,
        Strategy::Exponential { base } => {
            spaced_breaks(data, num_classes, SplineKind::Exponential { base }, options)?
        }
        Strategy::Logarithmic { base } => {
            spaced_breaks(data, num_classes, SplineKind::Logarithmic { base }, options)?
        }
        Strategy::EqualCount => simple_quantile(data, num_classes),
        Strategy::Quantile => quantile_l_to_r(data, num_classes.min(data.len()), options),
        Strategy::SpikeIsolating => spike_isolating_quantile(data, num_classes, options)?,
        Strategy::Geometric => geometric(data, num_classes)?,
        Strategy::FisherJenks => fisher_jenks(data, num_classes)?,
    };
    Ok(breaks)
}

/// Breaks `f(k)` for `k = 1..m`, where `f` maps `[0, m]` onto the data range.
///
/// A range within `options.tol()` counts as constant. The splines themselves
/// reject ranges within [`DEFAULT_TOL`], so that is the floor.
fn spaced_breaks(
    data: &[f64],
    num_classes: usize,
    spline: SplineKind,
    options: &ClassifyOptions,
) -> Result<Vec<f64>> {
    let (min, max) = min_max(data).ok_or_else(breaks_core::Error::empty_input)?;
    if approx_eq(min, max, options.tol().max(DEFAULT_TOL)) {
        warn!(min, max, "data range within tolerance, no spaced breaks");
        return Ok(Vec::new());
    }
    let knots = Knots::new(0.0, num_classes as f64);
    let ordinates = Ordinates::new(min, max);
    let breaks = (1..num_classes)
        .map(|k| spline.interpolate(k as f64, &knots, &ordinates))
        .collect::<breaks_core::Result<Vec<f64>>>()?;
    Ok(breaks)
}
