use serde::{Serialize, Serializer};

use crate::{
    catalog::structs::{Chart, Song},
    model::structures::chart_record::ChartRecord
};

/// A record resolved against the catalog and annotated with its rating.
/// Derived on every read, never persisted.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecord<'a> {
    #[serde(flatten)]
    pub record: ChartRecord,
    #[serde(skip)]
    pub song: &'a Song,
    #[serde(skip)]
    pub chart: &'a Chart,
    pub rating: f64,
    /// 0-based rank within the best 30, or `None` when outside of it.
    /// Serialized as -1 when outside.
    #[serde(serialize_with = "serialize_rating_index")]
    pub rating_index: Option<usize>
}

fn sentinel_index(rating_index: Option<usize>) -> i32 {
    rating_index.map(|i| i as i32).unwrap_or(-1)
}

fn serialize_rating_index<S: Serializer>(rating_index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32(sentinel_index(*rating_index))
}

impl EnrichedRecord<'_> {
    pub fn is_eligible(&self) -> bool {
        self.rating_index.is_some()
    }

    /// The rank as the signed index used by table collaborators, -1 when not eligible.
    pub fn rating_index_or_sentinel(&self) -> i32 {
        sentinel_index(self.rating_index)
    }
}
