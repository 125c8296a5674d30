use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{
    constants::MAX_ACHIEVEMENT_RATE,
    structures::{chart_record::ChartRecord, difficulty_level::DifficultyLevel}
};

use self::{cloud_save::CloudSaveSchema, social_data::SocialDataSchema};

pub mod cloud_save;
pub mod social_data;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid format: no valid data format found")]
    UnrecognizedFormatError
}

/// A score as it appears in a payload, before the difficulty code is mapped
#[derive(Debug, Clone, PartialEq)]
pub struct RawScore {
    pub song_id: String,
    pub difficulty_code: String,
    pub score: f64
}

/// A recognized import payload shape.
///
/// Implementations never fail: a payload either matches and yields its raw
/// scores, or it doesn't and the next schema is tried.
pub trait ImportSchema {
    fn name(&self) -> &'static str;

    fn extract(&self, payload: &Value) -> Option<Vec<RawScore>>;
}

/// Tried in order, first match wins
pub const SCHEMAS: [&dyn ImportSchema; 2] = [&CloudSaveSchema, &SocialDataSchema];

/// Parses pasted text into chart records.
///
/// Entries with an unrecognized difficulty code, or whose score is not a whole
/// number within the accepted achievement rate range, are dropped and logged.
/// A matching payload with no usable entries is an empty import, not an error.
pub fn parse_import(raw: &str) -> Result<Vec<ChartRecord>, ImportError> {
    let payload: Value = serde_json::from_str(raw)?;

    for schema in SCHEMAS {
        if let Some(scores) = schema.extract(&payload) {
            info!("Import payload matched {} ({} entries)", schema.name(), scores.len());
            return Ok(scores.into_iter().filter_map(to_chart_record).collect());
        }
    }

    Err(ImportError::UnrecognizedFormatError)
}

fn to_chart_record(raw: RawScore) -> Option<ChartRecord> {
    let Some(difficulty_level) = DifficultyLevel::from_import_code(&raw.difficulty_code) else {
        warn!(
            "Invalid difficulty level {:?} for song {}, skipping",
            raw.difficulty_code, raw.song_id
        );
        return None;
    };

    let Some(achievement_rate) = achievement_rate_from_score(raw.score) else {
        warn!(
            "Invalid achievement rate {} for song {} {}, skipping",
            raw.score, raw.song_id, difficulty_level
        );
        return None;
    };

    Some(ChartRecord {
        song_id: raw.song_id,
        difficulty_level,
        achievement_rate
    })
}

fn achievement_rate_from_score(score: f64) -> Option<u32> {
    if !score.is_finite() || score.fract() != 0.0 || score < 0.0 || score > MAX_ACHIEVEMENT_RATE as f64 {
        return None;
    }

    Some(score as u32)
}
