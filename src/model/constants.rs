// Achievement rate bounds (percentage scaled by 10,000)
pub const MAX_ACHIEVEMENT_RATE: u32 = 1_010_000;
pub const MIN_RATED_ACHIEVEMENT_RATE: i64 = 500_000;
pub const CLEAR_ACHIEVEMENT_RATE: i64 = 900_000;
// Ratings below a clear never exceed this value
pub const FAILING_RATING_CEILING: f64 = 6.0;
pub const RATING_PRECISION: f64 = 10_000.0;
// Best 30 aggregation
pub const B30_SIZE: usize = 30;
pub const BEST_SIZE: usize = 10;
pub const NEXT_SIZE: usize = 20;
pub const BEST_WEIGHT: f64 = 0.7;
pub const NEXT_WEIGHT: f64 = 0.3;
// Histogram
pub const HISTOGRAM_GRID_STEP: f64 = 0.5;
pub const SUMMARY_BUCKET_WIDTH: f64 = 0.25;
