use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty level of a chart. Serialized using the labels shown in-game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, EnumString)]
pub enum DifficultyLevel {
    #[serde(rename = "I")]
    #[strum(serialize = "I")]
    I,
    #[serde(rename = "II")]
    #[strum(serialize = "II")]
    II,
    #[serde(rename = "III")]
    #[strum(serialize = "III")]
    III,
    #[serde(rename = "IV")]
    #[strum(serialize = "IV")]
    IV,
    #[serde(rename = "IV-α")]
    #[strum(serialize = "IV-α")]
    IVAlpha
}

impl DifficultyLevel {
    /// Maps a difficulty code found in game save payloads to its level.
    /// Both the lowercase and the capitalized vocabularies are accepted.
    pub fn from_import_code(code: &str) -> Option<DifficultyLevel> {
        match code {
            "i" | "I" => Some(DifficultyLevel::I),
            "ii" | "II" => Some(DifficultyLevel::II),
            "iii" | "III" => Some(DifficultyLevel::III),
            "iv" | "IV" => Some(DifficultyLevel::IV),
            "iv_alpha" | "IV_Alpha" => Some(DifficultyLevel::IVAlpha),
            _ => None
        }
    }
}
