use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::import::{ImportSchema, RawScore};

/// Response of the followee social data endpoint.
/// The first profile is the player's own, the rest are friends.
#[derive(Deserialize, Debug)]
struct SocialDataResponse {
    result: SocialDataResult
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SocialDataResult {
    social_datas: Vec<SocialData>
}

#[derive(Deserialize, Debug)]
struct SocialData {
    /// song id -> difficulty code -> achievement rate
    scores: IndexMap<String, IndexMap<String, f64>>
}

pub struct SocialDataSchema;

impl ImportSchema for SocialDataSchema {
    fn name(&self) -> &'static str {
        "social data"
    }

    fn extract(&self, payload: &Value) -> Option<Vec<RawScore>> {
        let response = SocialDataResponse::deserialize(payload).ok()?;
        let own = response.result.social_datas.into_iter().next()?;

        let scores = own
            .scores
            .into_iter()
            .flat_map(|(song_id, levels)| {
                levels.into_iter().map(move |(code, score)| RawScore {
                    song_id: song_id.clone(),
                    difficulty_code: code,
                    score
                })
            })
            .collect();

        Some(scores)
    }
}
