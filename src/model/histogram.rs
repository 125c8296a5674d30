use serde::Serialize;

use crate::model::constants::HISTOGRAM_GRID_STEP;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Bucket {
    pub start: f64,
    pub end: f64,
    /// Where the bar is drawn
    pub center: f64,
    pub count: usize
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Buckets values into `[start, end)` bins of `bucket_width`.
///
/// The grid runs from the minimum floored to the nearest 0.5 up to the maximum
/// ceiled to the nearest 0.5, whatever the bucket width. Boundaries are reported
/// rounded to 2 decimals, counting uses the unrounded boundaries.
pub fn histogram(values: &[f64], bucket_width: f64) -> Vec<Bucket> {
    if values.is_empty() || !(bucket_width > 0.0) {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let grid_min = (min / HISTOGRAM_GRID_STEP).floor() * HISTOGRAM_GRID_STEP;
    let grid_max = (max / HISTOGRAM_GRID_STEP).ceil() * HISTOGRAM_GRID_STEP;
    let n_buckets = ((grid_max - grid_min) / bucket_width).ceil() as usize;

    (0..n_buckets)
        .map(|i| {
            let start = grid_min + i as f64 * bucket_width;
            let end = start + bucket_width;

            Bucket {
                start: round_2(start),
                end: round_2(end),
                center: round_2(start + bucket_width / 2.0),
                count: values.iter().filter(|v| **v >= start && **v < end).count()
            }
        })
        .collect()
}
