//! Quantile classification that gives dominant values a class of their own
//!
//! When one value (or a tight window of values) holds more points than an
//! average class, plain quantiles would spread it over several classes. Here
//! the spike is isolated into its own class and the data on either side is
//! classified recursively, with the remaining class budget split between the
//! two sides in proportion to their sizes.

use crate::apportion::pro_rata;
use crate::quantile::quantile_l_to_r;
use crate::spike::{max_interval_lt_width_w_with_most_data_points, InclusiveInterval};
use breaks_core::utils::midpoint;
use breaks_core::{ClassifyOptions, Error, OrderedCounter, Result};
use tracing::{debug, instrument};

/// Spike-isolating quantile boundaries for sorted `data`.
///
/// The frequency table is built once; each recursion works on a slice of it.
/// The class count is reduced to `data.len()`. Every nested call has fewer
/// classes than its parent, so the recursion is at most `num_classes` deep;
/// an explicit `options.max_depth()` below that fails with
/// [`Error::RecursionLimit`].
///
/// # Examples
///
/// ```rust
/// use breaks_classify::spike_isolating_quantile;
/// use breaks_core::ClassifyOptions;
///
/// let data = [1.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0, 10.0];
/// let breaks = spike_isolating_quantile(&data, 3, &ClassifyOptions::default()).unwrap();
/// assert_eq!(breaks, vec![4.0, 7.0]);
/// ```
#[instrument(skip(data, options), fields(n = data.len()))]
pub fn spike_isolating_quantile(
    data: &[f64],
    num_classes: usize,
    options: &ClassifyOptions,
) -> Result<Vec<f64>> {
    let num_classes = num_classes.min(data.len());
    if num_classes <= 2 {
        return Ok(quantile_l_to_r(data, num_classes, options));
    }
    let counter = OrderedCounter::from_sorted(data);
    let max_depth = options.depth_limit(num_classes);
    isolate(data, &counter, num_classes, options, 1, max_depth)
}

fn isolate(
    data: &[f64],
    counter: &OrderedCounter,
    num_classes: usize,
    options: &ClassifyOptions,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<f64>> {
    if depth > max_depth {
        return Err(Error::RecursionLimit { depth });
    }
    let num_classes = num_classes.min(data.len());
    if num_classes <= 2 {
        return Ok(quantile_l_to_r(data, num_classes, options));
    }

    let n = data.len();
    let min_num = options.min_num_for(n, num_classes);
    let Some(spike) = max_interval_lt_width_w_with_most_data_points(counter, min_num, options.max_width())
    else {
        return Ok(quantile_l_to_r(data, num_classes, options));
    };

    let ia = data.partition_point(|&x| x < spike.a);
    let ib = data.partition_point(|&x| x <= spike.b).saturating_sub(1);
    let left_len = ia;
    let right_len = n - ib - 1;

    let (extra_a, extra_b) = split_extra_classes(num_classes, left_len, right_len)?;
    debug!(
        a = spike.a,
        b = spike.b,
        points = spike.num_data_points,
        extra_a,
        extra_b,
        depth,
        "isolating spike"
    );

    let (left_counter, right_counter) = split_counter(counter, &spike);
    let mut breaks = isolate(&data[..ia], &left_counter, extra_a + 1, options, depth + 1, max_depth)?;
    if left_len > 0 {
        breaks.push(midpoint(data[ia - 1], spike.a));
    }
    if right_len > 0 {
        breaks.push(midpoint(spike.b, data[ib + 1]));
    }
    breaks.extend(isolate(
        &data[ib + 1..],
        &right_counter,
        extra_b + 1,
        options,
        depth + 1,
        max_depth,
    )?);
    Ok(breaks)
}

/// Classes beyond one per side, for the data below and above a spike
fn split_extra_classes(num_classes: usize, left_len: usize, right_len: usize) -> Result<(usize, usize)> {
    if num_classes <= 3 || (left_len == 0 && right_len == 0) {
        return Ok((0, 0));
    }
    // An empty side can hold no classes
    if left_len == 0 {
        return Ok((0, num_classes - 2));
    }
    if right_len == 0 {
        return Ok((num_classes - 2, 0));
    }
    pro_rata(num_classes - 3, left_len, right_len)
}

fn split_counter(counter: &OrderedCounter, spike: &InclusiveInterval) -> (OrderedCounter, OrderedCounter) {
    (
        counter.slice(0..spike.index_a),
        counter.slice(spike.index_b + 1..counter.len()),
    )
}
