use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::import::{ImportSchema, RawScore};

/// Response of the game's cloud save endpoint.
/// Only the first result holds the player's own save.
#[derive(Deserialize, Debug)]
struct CloudSaveResponse {
    results: Vec<CloudSaveResult>
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CloudSaveResult {
    cloud_save: CloudSave
}

#[derive(Deserialize, Debug)]
struct CloudSave {
    data: CloudSaveData
}

#[derive(Deserialize, Debug)]
struct CloudSaveData {
    data: CloudSaveContent
}

#[derive(Deserialize, Debug)]
struct CloudSaveContent {
    songs: CloudSaveSongs
}

#[derive(Deserialize, Debug)]
struct CloudSaveSongs {
    songs: IndexMap<String, CloudSaveSong>
}

#[derive(Deserialize, Debug)]
struct CloudSaveSong {
    levels: IndexMap<String, CloudSaveLevel>
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct CloudSaveLevel {
    flag: String,
    is_cleared: bool,
    score: f64
}

pub struct CloudSaveSchema;

impl ImportSchema for CloudSaveSchema {
    fn name(&self) -> &'static str {
        "cloud save"
    }

    fn extract(&self, payload: &Value) -> Option<Vec<RawScore>> {
        let response = CloudSaveResponse::deserialize(payload).ok()?;
        let first = response.results.into_iter().next()?;

        let scores = first
            .cloud_save
            .data
            .data
            .songs
            .songs
            .into_iter()
            .flat_map(|(song_id, song)| {
                song.levels.into_iter().map(move |(code, level)| RawScore {
                    song_id: song_id.clone(),
                    difficulty_code: code,
                    score: level.score
                })
            })
            .collect();

        Some(scores)
    }
}
