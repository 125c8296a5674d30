use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{constants::MAX_ACHIEVEMENT_RATE, structures::difficulty_level::DifficultyLevel};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordValidationError {
    #[error("Achievement rate {0} is above the maximum of {max}", max = MAX_ACHIEVEMENT_RATE)]
    AchievementRateOutOfBounds(u32),

    #[error("A song must be selected")]
    EmptySongId
}

/// Identifies a single chart: a song and one of its difficulty levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub song_id: String,
    pub difficulty_level: DifficultyLevel
}

/// A user's best attempt on one chart.
///
/// Serialized with the field names used by the persisted record blob.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    #[serde(rename = "songSlug")]
    pub song_id: String,
    pub difficulty_level: DifficultyLevel,
    /// Percentage scaled by 10,000 (1,000,000 = 100.0000%)
    pub achievement_rate: u32
}

impl ChartRecord {
    pub fn new(song_id: impl Into<String>, difficulty_level: DifficultyLevel, achievement_rate: u32) -> ChartRecord {
        ChartRecord {
            song_id: song_id.into(),
            difficulty_level,
            achievement_rate
        }
    }

    pub fn key(&self) -> ChartKey {
        ChartKey {
            song_id: self.song_id.clone(),
            difficulty_level: self.difficulty_level
        }
    }

    pub fn is_same_chart(&self, other: &ChartRecord) -> bool {
        self.song_id == other.song_id && self.difficulty_level == other.difficulty_level
    }

    /// Checks the record against the bounds accepted at submission time.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.song_id.is_empty() {
            return Err(RecordValidationError::EmptySongId);
        }

        if self.achievement_rate > MAX_ACHIEVEMENT_RATE {
            return Err(RecordValidationError::AchievementRateOutOfBounds(self.achievement_rate));
        }

        Ok(())
    }
}
