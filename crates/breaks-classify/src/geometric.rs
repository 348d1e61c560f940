//! Geometric progression breaks

use breaks_core::utils::min_max;
use breaks_core::{Error, Result};
use tracing::debug;

/// Offset added to the maximum so the top class includes it
pub const GEOMETRIC_EPSILON: f64 = 1e-5;

/// Boundaries forming a geometric progression over sorted `data`.
///
/// - `min > 0`: `min * r^k` with `r = ((max + ε) / min)^(1/m)`
/// - `min == 0` and `max < 1`: a progression in negative powers ending at `max + ε`
/// - `min == 0` and `max > 1`: `r^k` with `r = (max + ε)^(1/m)`
///
/// Data that is constant, spans exactly `[0, 1]`, or contains negative values
/// has no geometric classification and yields [`Error::DegenerateDomain`].
///
/// # Examples
///
/// ```rust
/// use breaks_classify::geometric;
///
/// let breaks = geometric(&[1.0, 10.0, 100.0, 1000.0], 3).unwrap();
/// assert!((breaks[0] - 10.0).abs() < 1e-3);
/// assert!((breaks[1] - 100.0).abs() < 1e-2);
///
/// assert!(geometric(&[5.0, 5.0, 5.0, 5.0], 3).is_err());
/// ```
pub fn geometric(data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
    let (min, max) = min_max(data).ok_or_else(Error::empty_input)?;

    if min == max {
        return Err(Error::DegenerateDomain(format!(
            "all data equal to {min}, no geometric progression"
        )));
    }
    if min < 0.0 {
        return Err(Error::DegenerateDomain(format!(
            "geometric breaks need non-negative data, minimum is {min}"
        )));
    }
    if min == 0.0 && max == 1.0 {
        return Err(Error::DegenerateDomain(
            "data spanning exactly [0, 1] has no geometric progression".to_string(),
        ));
    }
    if num_classes <= 1 {
        return Ok(Vec::new());
    }

    let m = num_classes as f64;
    let top = max + GEOMETRIC_EPSILON;
    let breaks: Vec<f64> = if min > 0.0 {
        let ratio = (top / min).powf(1.0 / m);
        debug!(ratio, "geometric progression from minimum");
        (1..num_classes).map(|k| min * ratio.powi(k as i32)).collect()
    } else if max < 1.0 {
        let ratio = top.powf(-1.0 / m);
        debug!(ratio, "geometric progression in negative powers");
        (1..num_classes)
            .map(|k| top * ratio.powi(-((num_classes - k) as i32)))
            .collect()
    } else {
        let ratio = top.powf(1.0 / m);
        debug!(ratio, "geometric progression from one");
        (1..num_classes).map(|k| ratio.powi(k as i32)).collect()
    };
    Ok(breaks)
}
