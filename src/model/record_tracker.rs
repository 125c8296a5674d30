use indexmap::IndexMap;
use tracing::{debug, info};

use crate::model::structures::{
    chart_record::{ChartKey, ChartRecord},
    difficulty_level::DifficultyLevel,
    merge_outcome::MergeOutcome
};

/// Whether a bulk import keeps the records already tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    #[default]
    Merge,
    /// Clears the tracked records before merging the import
    Replace
}

/// Counts of what happened during a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportStats {
    pub inserted: usize,
    pub updated: usize,
    pub ignored: usize,
    /// Entries with an achievement rate of 0, dropped before merging
    pub unplayed: usize
}

impl ImportStats {
    fn track(&mut self, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::Inserted => self.inserted += 1,
            MergeOutcome::Updated => self.updated += 1,
            MergeOutcome::Ignored => self.ignored += 1
        }
    }
}

/// Decides what to do with a candidate given the stored record for the same chart.
/// Only a strictly higher achievement rate replaces a stored record.
pub fn merge_decision(existing: Option<&ChartRecord>, candidate: &ChartRecord) -> MergeOutcome {
    match existing {
        None => MergeOutcome::Inserted,
        Some(r) if candidate.achievement_rate > r.achievement_rate => MergeOutcome::Updated,
        Some(_) => MergeOutcome::Ignored
    }
}

/// Holds at most one record per chart, in insertion order.
///
/// Every mutation goes through `insert_or_update`, so the one-record-per-chart
/// invariant holds regardless of what the persistence layer hands back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTracker {
    records: IndexMap<ChartKey, ChartRecord>
}

impl RecordTracker {
    pub fn new() -> RecordTracker {
        RecordTracker {
            records: IndexMap::new()
        }
    }

    /// Builds a tracker from a flat, possibly unnormalized, record list
    pub fn from_records(records: Vec<ChartRecord>) -> RecordTracker {
        let mut tracker = RecordTracker::new();

        for record in records {
            tracker.insert_or_update(record);
        }

        tracker
    }

    /// Inserts the record when its chart is untracked, replaces the stored record in place
    /// when the candidate has a strictly higher achievement rate, and discards it otherwise.
    pub fn insert_or_update(&mut self, candidate: ChartRecord) -> MergeOutcome {
        let key = candidate.key();
        let outcome = merge_decision(self.records.get(&key), &candidate);

        match outcome {
            MergeOutcome::Inserted | MergeOutcome::Updated => {
                debug!(
                    "{:?} {} {} at {}",
                    outcome, candidate.song_id, candidate.difficulty_level, candidate.achievement_rate
                );
                // IndexMap keeps the original position when the key already exists
                self.records.insert(key, candidate);
            }
            MergeOutcome::Ignored => {}
        }

        outcome
    }

    /// Merges a batch of imported records. Entries with an achievement rate of 0
    /// were never played and are dropped before merging.
    pub fn import(&mut self, records: impl IntoIterator<Item = ChartRecord>, mode: ImportMode) -> ImportStats {
        if mode == ImportMode::Replace {
            self.clear();
        }

        let mut stats = ImportStats::default();

        for record in records {
            if record.achievement_rate == 0 {
                stats.unplayed += 1;
                continue;
            }

            stats.track(self.insert_or_update(record));
        }

        info!(
            "Import merged: {} inserted, {} updated, {} ignored, {} unplayed",
            stats.inserted, stats.updated, stats.ignored, stats.unplayed
        );

        stats
    }

    pub fn get(&self, song_id: &str, difficulty_level: DifficultyLevel) -> Option<&ChartRecord> {
        self.records.get(&ChartKey {
            song_id: song_id.to_string(),
            difficulty_level
        })
    }

    /// Removes the record for a chart, keeping the order of the remaining records
    pub fn remove(&mut self, song_id: &str, difficulty_level: DifficultyLevel) -> Option<ChartRecord> {
        self.records.shift_remove(&ChartKey {
            song_id: song_id.to_string(),
            difficulty_level
        })
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartRecord> {
        self.records.values()
    }

    /// The flat record list handed to the persistence layer
    pub fn to_records(&self) -> Vec<ChartRecord> {
        self.records.values().cloned().collect()
    }

    pub fn into_records(self) -> Vec<ChartRecord> {
        self.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structures::difficulty_level::DifficultyLevel::{I, III, IV};

    fn record(song_id: &str, level: DifficultyLevel, rate: u32) -> ChartRecord {
        ChartRecord::new(song_id, level, rate)
    }

    #[test]
    fn test_insert_new_chart() {
        let mut tracker = RecordTracker::new();

        assert_eq!(tracker.insert_or_update(record("song-a", III, 950_000)), MergeOutcome::Inserted);
        assert_eq!(tracker.insert_or_update(record("song-a", IV, 900_000)), MergeOutcome::Inserted);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_higher_rate_replaces() {
        let mut tracker = RecordTracker::from_records(vec![record("song-a", III, 950_000)]);

        assert_eq!(tracker.insert_or_update(record("song-a", III, 960_000)), MergeOutcome::Updated);
        assert_eq!(tracker.get("song-a", III).map(|r| r.achievement_rate), Some(960_000));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_lower_or_equal_rate_ignored() {
        let mut tracker = RecordTracker::from_records(vec![record("song-a", III, 950_000)]);

        assert_eq!(tracker.insert_or_update(record("song-a", III, 900_000)), MergeOutcome::Ignored);
        assert_eq!(tracker.insert_or_update(record("song-a", III, 950_000)), MergeOutcome::Ignored);
        assert_eq!(tracker.get("song-a", III).map(|r| r.achievement_rate), Some(950_000));
    }

    #[test]
    fn test_update_preserves_order() {
        let mut tracker = RecordTracker::from_records(vec![
            record("song-a", I, 900_000),
            record("song-b", I, 900_000),
            record("song-c", I, 900_000)
        ]);

        tracker.insert_or_update(record("song-a", I, 1_000_000));

        let order = tracker.iter().map(|r| r.song_id.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["song-a", "song-b", "song-c"]);
        assert_eq!(tracker.to_records()[0].achievement_rate, 1_000_000);
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let mut tracker = RecordTracker::new();
        tracker.insert_or_update(record("song-a", I, 900_000));

        assert_eq!(tracker.insert_or_update(record("Song-A", I, 800_000)), MergeOutcome::Inserted);
    }

    #[test]
    fn test_from_records_normalizes_duplicates() {
        let tracker = RecordTracker::from_records(vec![
            record("song-a", I, 900_000),
            record("song-b", I, 700_000),
            record("song-a", I, 990_000),
            record("song-a", I, 910_000)
        ]);

        assert_eq!(
            tracker.into_records(),
            vec![record("song-a", I, 990_000), record("song-b", I, 700_000)]
        );
    }

    #[test]
    fn test_normalizing_is_idempotent() {
        let tracker = RecordTracker::from_records(vec![
            record("song-a", I, 900_000),
            record("song-b", IV, 1_005_000),
            record("song-a", I, 990_000)
        ]);
        let records = tracker.to_records();

        let mut again = tracker.clone();
        for r in records.clone() {
            assert_eq!(again.insert_or_update(r), MergeOutcome::Ignored);
        }

        assert_eq!(again.to_records(), records);
        assert_eq!(RecordTracker::from_records(records.clone()).to_records(), records);
    }

    #[test]
    fn test_import_drops_unplayed() {
        let mut tracker = RecordTracker::new();

        let stats = tracker.import(
            vec![
                record("song-a", I, 0),
                record("song-b", I, 950_000),
                record("song-b", I, 940_000)
            ],
            ImportMode::Merge
        );

        assert_eq!(
            stats,
            ImportStats {
                inserted: 1,
                updated: 0,
                ignored: 1,
                unplayed: 1
            }
        );
        assert!(tracker.get("song-a", I).is_none());
    }

    #[test]
    fn test_import_merge_keeps_existing() {
        let mut tracker = RecordTracker::from_records(vec![record("song-a", I, 990_000)]);

        let stats = tracker.import(
            vec![record("song-a", I, 980_000), record("song-b", I, 950_000)],
            ImportMode::Merge
        );

        assert_eq!(stats.ignored, 1);
        assert_eq!(tracker.get("song-a", I).map(|r| r.achievement_rate), Some(990_000));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_import_replace_clears_existing() {
        let mut tracker = RecordTracker::from_records(vec![record("song-a", I, 990_000)]);

        tracker.import(vec![record("song-b", I, 950_000)], ImportMode::Replace);

        assert_eq!(tracker.to_records(), vec![record("song-b", I, 950_000)]);
    }

    #[test]
    fn test_import_consumes_iterator() {
        let mut tracker = RecordTracker::new();

        let stats = tracker.import(
            ["song-a", "song-b", "song-a"]
                .into_iter()
                .zip([900_000, 0, 950_000])
                .map(|(id, rate)| record(id, III, rate)),
            ImportMode::Merge
        );

        assert_eq!(stats.inserted, 1);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.unplayed, 1);
        assert_eq!(tracker.to_records(), vec![record("song-a", III, 950_000)]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut tracker = RecordTracker::from_records(vec![
            record("song-a", I, 900_000),
            record("song-b", I, 900_000),
            record("song-c", I, 900_000)
        ]);

        assert!(tracker.remove("song-b", I).is_some());
        assert!(tracker.remove("song-b", I).is_none());
        assert_eq!(
            tracker.iter().map(|r| r.song_id.as_str()).collect::<Vec<_>>(),
            vec!["song-a", "song-c"]
        );

        tracker.clear();
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_merge_decision() {
        let existing = record("song-a", III, 950_000);

        assert_eq!(merge_decision(None, &existing), MergeOutcome::Inserted);
        assert_eq!(
            merge_decision(Some(&existing), &record("song-a", III, 960_000)),
            MergeOutcome::Updated
        );
        assert_eq!(
            merge_decision(Some(&existing), &record("song-a", III, 900_000)),
            MergeOutcome::Ignored
        );
    }
}
