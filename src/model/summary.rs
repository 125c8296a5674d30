use itertools::Itertools;

use crate::model::{
    aggregation::best_records,
    constants::{BEST_SIZE, BEST_WEIGHT, NEXT_SIZE, NEXT_WEIGHT, SUMMARY_BUCKET_WIDTH},
    histogram::histogram,
    structures::{enriched_record::EnrichedRecord, rating_summary::RatingSummary}
};

/// Overall rating from best-first eligible ratings.
///
/// `best 10 average * 0.7 + next 20 average * 0.3`. The averages always divide by
/// 10 and 20, so missing records count as 0 and a short list rates lower.
pub fn overall_rating(best_first: &[f64]) -> f64 {
    let best_sum: f64 = best_first.iter().take(BEST_SIZE).sum();
    let next_sum: f64 = best_first.iter().skip(BEST_SIZE).take(NEXT_SIZE).sum();

    (best_sum / BEST_SIZE as f64) * BEST_WEIGHT + (next_sum / NEXT_SIZE as f64) * NEXT_WEIGHT
}

/// Summary of the eligible records: the overall rating and the rating distribution
pub fn summarize(enriched: &[EnrichedRecord]) -> RatingSummary {
    let ratings = best_records(enriched).iter().map(|r| r.rating).collect_vec();

    if ratings.is_empty() {
        return RatingSummary::default();
    }

    let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = ratings.iter().sum::<f64>() / ratings.len() as f64;

    RatingSummary {
        rating: overall_rating(&ratings),
        min,
        max,
        avg,
        histogram: histogram(&ratings, SUMMARY_BUCKET_WIDTH)
    }
}
