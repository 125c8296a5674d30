use serde::Serialize;

/// Display tier for an overall rating
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingTier {
    /// Lowest integer rating that falls into this tier
    pub lower_bound: u8,
    /// Badge number, 1 through 13
    pub tier: u8,
    pub color: &'static str
}

const fn tier(lower_bound: u8, tier: u8, color: &'static str) -> RatingTier {
    RatingTier {
        lower_bound,
        tier,
        color
    }
}

/// Ordered by descending lower bound so the first match wins
pub const RATING_TIERS: [RatingTier; 17] = [
    tier(16, 13, "#fc8101"),
    tier(15, 12, "#fc8301"),
    tier(14, 11, "#d90dff"),
    tier(13, 10, "#fc0fae"),
    tier(12, 9, "#ff090b"),
    tier(11, 8, "#fcd906"),
    tier(10, 7, "#fcd906"),
    tier(9, 6, "#02e0ff"),
    tier(8, 5, "#02e0ff"),
    tier(7, 4, "#02e0ff"),
    tier(6, 3, "#09ff68"),
    tier(5, 3, "#09ff68"),
    tier(4, 3, "#09ff68"),
    tier(3, 2, "#06ff02"),
    tier(2, 2, "#06ff02"),
    tier(1, 1, "#86ff02"),
    tier(0, 1, "#86ff02")
];

impl RatingTier {
    /// Finds the tier for a summary rating. Negative or NaN ratings have no tier.
    pub fn for_rating(rating: f64) -> Option<RatingTier> {
        RATING_TIERS
            .iter()
            .find(|t| rating >= t.lower_bound as f64)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_for_zero() {
        assert_eq!(RatingTier::for_rating(0.0).map(|t| t.tier), Some(1));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RatingTier::for_rating(11.999).map(|t| t.lower_bound), Some(11));
        assert_eq!(RatingTier::for_rating(12.0).map(|t| t.tier), Some(9));
        assert_eq!(RatingTier::for_rating(17.2).map(|t| t.tier), Some(13));
    }

    #[test]
    fn test_tier_negative() {
        assert_eq!(RatingTier::for_rating(-0.5), None);
        assert_eq!(RatingTier::for_rating(f64::NAN), None);
    }
}
