//! Equal-count classification by index arithmetic

/// Boundaries splitting sorted `data` into `num_classes` runs of equal length.
///
/// With `class_size = n / num_classes` the boundaries are
/// `data[class_size], data[2 * class_size], ...`. Duplicates are not treated
/// specially, so repeated values may straddle a boundary.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::simple_quantile;
///
/// let data: Vec<f64> = (1..=10).map(|i| f64::from(i) * 10.0).collect();
/// assert_eq!(simple_quantile(&data, 4), vec![30.0, 50.0, 70.0]);
/// ```
pub fn simple_quantile(data: &[f64], num_classes: usize) -> Vec<f64> {
    let num_classes = num_classes.min(data.len());
    if num_classes <= 1 {
        return Vec::new();
    }
    let class_size = data.len() / num_classes;
    (1..num_classes).map(|k| data[k * class_size]).collect()
}
