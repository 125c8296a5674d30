use serde::{Deserialize, Serialize};

use crate::model::structures::difficulty_level::DifficultyLevel;

/// A string with optional translations. `default` is always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LocalizedString {
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(rename = "zh-Hans", skip_serializing_if = "Option::is_none")]
    pub zh_hans: Option<String>,
    #[serde(rename = "zh-Hant", skip_serializing_if = "Option::is_none")]
    pub zh_hant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ko: Option<String>
}

impl LocalizedString {
    pub fn new(default: impl Into<String>) -> LocalizedString {
        LocalizedString {
            default: default.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub difficulty_level: DifficultyLevel,
    pub difficulty_decimal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_jacket_id: Option<String>,
    pub chart_designer: String,
    pub jacket_designer: String
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub artist: String,
    pub release_version: String,
    #[serde(rename = "title_localized")]
    pub title_localized: LocalizedString,
    #[serde(rename = "source_localized", default, skip_serializing_if = "Option::is_none")]
    pub source_localized: Option<LocalizedString>,
    pub charts: Vec<Chart>
}

impl Song {
    pub fn title(&self) -> &str {
        &self.title_localized.default
    }

    pub fn chart(&self, difficulty_level: DifficultyLevel) -> Option<&Chart> {
        self.charts.iter().find(|c| c.difficulty_level == difficulty_level)
    }

    /// Jacket image id for a chart, honoring per-chart overrides
    pub fn jacket_id(&self, difficulty_level: DifficultyLevel) -> &str {
        self.chart(difficulty_level)
            .and_then(|c| c.override_jacket_id.as_deref())
            .unwrap_or(&self.id)
    }
}
