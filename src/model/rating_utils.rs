use crate::model::constants::{
    CLEAR_ACHIEVEMENT_RATE, FAILING_RATING_CEILING, MIN_RATED_ACHIEVEMENT_RATE, RATING_PRECISION
};

/// One linear segment of the rating curve.
/// Within the band: `difficulty + offset + (rate - floor) / divisor`
struct RatingBand {
    floor: i64,
    offset: f64,
    divisor: f64
}

static RATING_BANDS: [RatingBand; 7] = [
    RatingBand {
        floor: 500_000,
        offset: -5.0,
        divisor: 100_000.0
    },
    RatingBand {
        floor: 900_000,
        offset: -1.0,
        divisor: 50_000.0
    },
    RatingBand {
        floor: 950_000,
        offset: 0.0,
        divisor: 30_000.0
    },
    RatingBand {
        floor: 980_000,
        offset: 1.0,
        divisor: 20_000.0
    },
    RatingBand {
        floor: 1_000_000,
        offset: 2.0,
        divisor: 10_000.0
    },
    RatingBand {
        floor: 1_004_000,
        offset: 2.4,
        divisor: 4_000.0
    },
    RatingBand {
        floor: 1_008_000,
        offset: 3.4,
        divisor: 10_000.0
    }
];

/// # Chart rating
///
/// Maps a chart's difficulty decimal and an achievement rate to a rating,
/// rounded to 4 decimal places.
///
/// - Rates up to and including 500,000 are unrated (0).
/// - Rates below 900,000 are failing attempts and never rate above 6.0.
/// - Ratings are never negative.
///
/// The function is total: rates outside of the accepted bounds still produce
/// a value, validation happens where records are submitted.
pub fn calculate_rating(difficulty: f64, achievement_rate: i64) -> f64 {
    if achievement_rate <= MIN_RATED_ACHIEVEMENT_RATE {
        return 0.0;
    }

    let band = RATING_BANDS
        .iter()
        .rev()
        .find(|b| achievement_rate >= b.floor)
        .unwrap_or(&RATING_BANDS[0]);

    let mut rating = difficulty + band.offset + (achievement_rate - band.floor) as f64 / band.divisor;

    if achievement_rate < CLEAR_ACHIEVEMENT_RATE {
        rating = rating.min(FAILING_RATING_CEILING);
    }

    round_rating(rating.max(0.0))
}

/// Rounds half away from zero at 4 decimal places
fn round_rating(rating: f64) -> f64 {
    (rating * RATING_PRECISION).round() / RATING_PRECISION
}
