use serde::Serialize;

use crate::model::histogram::Bucket;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct RatingSummary {
    /// Best 10 average * 0.7 + next 20 average * 0.3
    pub rating: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub histogram: Vec<Bucket>
}
