use std::cmp::Ordering;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    model::{
        constants::B30_SIZE,
        rating_utils::calculate_rating,
        structures::{
            chart_record::ChartRecord, difficulty_level::DifficultyLevel, enriched_record::EnrichedRecord,
            orphan_policy::OrphanPolicy
        }
    }
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Record references {song_id} {difficulty_level}, which is not in the catalog")]
    ReferenceIntegrityViolation {
        song_id: String,
        difficulty_level: DifficultyLevel
    }
}

/// Rates every record and ranks the best 30.
///
/// Fails on the first record whose chart is missing from the catalog.
/// See [`aggregate_with_policy`].
pub fn aggregate<'a>(records: &[ChartRecord], catalog: &'a Catalog) -> Result<Vec<EnrichedRecord<'a>>, AggregationError> {
    aggregate_with_policy(records, catalog, OrphanPolicy::Fail)
}

/// # Best 30 aggregation
///
/// Steps:
/// 1. Resolve the song and chart of every record from the catalog.
/// 2. Rate every record.
/// 3. Order the records by descending rating. Ties keep insertion order.
/// 4. The first 30 are eligible, each gets its 0-based position as its rating index.
///
/// The output keeps the input order.
pub fn aggregate_with_policy<'a>(
    records: &[ChartRecord],
    catalog: &'a Catalog,
    policy: OrphanPolicy
) -> Result<Vec<EnrichedRecord<'a>>, AggregationError> {
    let mut enriched = Vec::with_capacity(records.len());

    for record in records {
        let Some((song, chart)) = catalog.chart(&record.song_id, record.difficulty_level) else {
            match policy {
                OrphanPolicy::Fail => {
                    return Err(AggregationError::ReferenceIntegrityViolation {
                        song_id: record.song_id.clone(),
                        difficulty_level: record.difficulty_level
                    })
                }
                OrphanPolicy::Skip => {
                    warn!(
                        "Skipping record for {} {}, chart not in catalog",
                        record.song_id, record.difficulty_level
                    );
                    continue;
                }
            }
        };

        enriched.push(EnrichedRecord {
            record: record.clone(),
            song,
            chart,
            rating: calculate_rating(chart.difficulty_decimal, i64::from(record.achievement_rate)),
            rating_index: None
        });
    }

    rank_best(&mut enriched);

    debug!(
        "Aggregated {} records, {} eligible",
        enriched.len(),
        enriched.iter().filter(|r| r.is_eligible()).count()
    );

    Ok(enriched)
}

/// Assigns rating indices to the best `B30_SIZE` records in place
fn rank_best(enriched: &mut [EnrichedRecord]) {
    // Stable sort, equal ratings stay in insertion order
    let ranked = (0..enriched.len())
        .sorted_by(|a, b| {
            enriched[*b]
                .rating
                .partial_cmp(&enriched[*a].rating)
                .unwrap_or(Ordering::Equal)
        })
        .take(B30_SIZE)
        .collect_vec();

    for (rank, idx) in ranked.into_iter().enumerate() {
        enriched[idx].rating_index = Some(rank);
    }
}

/// The eligible records ordered by rating index
pub fn best_records<'r, 'a>(enriched: &'r [EnrichedRecord<'a>]) -> Vec<&'r EnrichedRecord<'a>> {
    enriched
        .iter()
        .filter(|r| r.is_eligible())
        .sorted_by_key(|r| r.rating_index)
        .collect()
}
