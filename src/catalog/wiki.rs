use serde::Deserialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use tracing::warn;

use crate::{
    catalog::{
        structs::{Chart, LocalizedString, Song},
        Catalog, CatalogError
    },
    model::structures::difficulty_level::DifficultyLevel
};

/// Charts whose IV difficulty uses its own jacket
const IV_JACKET_ID_OVERRIDES: [(&str, &str); 2] = [("rush-e", "rush-e_IV"), ("epitaxy", "epitaxy_IV")];

/// Difficulty encoding used by the community wiki song list
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RatingClass {
    I = 0,
    II = 1,
    III = 2,
    IV = 3,
    IVAlpha = 200
}

impl From<RatingClass> for DifficultyLevel {
    fn from(value: RatingClass) -> Self {
        match value {
            RatingClass::I => DifficultyLevel::I,
            RatingClass::II => DifficultyLevel::II,
            RatingClass::III => DifficultyLevel::III,
            RatingClass::IV => DifficultyLevel::IV,
            RatingClass::IVAlpha => DifficultyLevel::IVAlpha
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct WikiSongList {
    pub songs: Vec<WikiSong>
}

#[derive(Deserialize, Debug)]
pub struct WikiSong {
    pub id: String,
    pub artist: String,
    pub title_localized: LocalizedString,
    pub difficulties: Vec<WikiDifficulty>,
    pub release_version: String,
    pub source_localized: Option<LocalizedString>,
    pub has_challenge_badge: Option<bool>
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WikiDifficulty {
    pub rating_class: RatingClass,
    pub rating_real: f64,
    pub chart_designer: String,
    pub jacket_designer: String
}

impl From<WikiDifficulty> for Chart {
    fn from(value: WikiDifficulty) -> Self {
        Chart {
            difficulty_level: value.rating_class.into(),
            difficulty_decimal: value.rating_real,
            override_jacket_id: None,
            chart_designer: value.chart_designer,
            jacket_designer: value.jacket_designer
        }
    }
}

fn iv_jacket_override(song_id: &str) -> Option<String> {
    IV_JACKET_ID_OVERRIDES
        .iter()
        .find(|(id, _)| *id == song_id)
        .map(|(_, jacket)| jacket.to_string())
}

fn song_from_wiki(wiki_song: WikiSong) -> Song {
    let charts = wiki_song
        .difficulties
        .into_iter()
        .map(|d| {
            let mut chart = Chart::from(d);
            if chart.difficulty_level == DifficultyLevel::IV {
                chart.override_jacket_id = iv_jacket_override(&wiki_song.id);
            }
            chart
        })
        .collect();

    Song {
        id: wiki_song.id,
        artist: wiki_song.artist,
        release_version: wiki_song.release_version,
        title_localized: wiki_song.title_localized,
        source_localized: wiki_song.source_localized,
        charts
    }
}

/// Converts the wiki song list JSON into catalog songs.
/// Songs without an id are skipped.
pub fn songs_from_wiki_json(json: &str) -> Result<Vec<Song>, CatalogError> {
    let song_list: WikiSongList = serde_json::from_str(json)?;

    let songs = song_list
        .songs
        .into_iter()
        .filter(|s| {
            if s.id.is_empty() {
                warn!("Skipping song without an id: {}", s.title_localized.default);
                return false;
            }
            true
        })
        .map(song_from_wiki)
        .collect();

    Ok(songs)
}

impl Catalog {
    pub fn from_wiki_json(json: &str) -> Result<Catalog, CatalogError> {
        Catalog::new(songs_from_wiki_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIKI_JSON: &str = r#"{
        "songs": [
            {
                "id": "rush-e",
                "artist": "Sheet Music Boss",
                "title_localized": { "default": "Rush E" },
                "release_version": "2.0.0",
                "difficulties": [
                    { "ratingClass": 0, "ratingReal": 3.0, "chartDesigner": "a", "jacketDesigner": "b" },
                    { "ratingClass": 3, "ratingReal": 15.8, "chartDesigner": "a", "jacketDesigner": "b" },
                    { "ratingClass": 200, "ratingReal": 16.5, "chartDesigner": "a", "jacketDesigner": "b" }
                ]
            },
            {
                "id": "",
                "artist": "nobody",
                "title_localized": { "default": "Placeholder" },
                "release_version": "1.0.0",
                "difficulties": []
            },
            {
                "id": "quiet",
                "artist": "somebody",
                "title_localized": { "default": "Quiet" },
                "source_localized": { "default": "Original" },
                "release_version": "1.1.0",
                "has_challenge_badge": true,
                "difficulties": [
                    { "ratingClass": 3, "ratingReal": 11.2, "chartDesigner": "a", "jacketDesigner": "b" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_songs_from_wiki_json() {
        let songs = songs_from_wiki_json(WIKI_JSON).unwrap();

        assert_eq!(songs.len(), 2);

        let rush_e = &songs[0];
        assert_eq!(rush_e.charts.len(), 3);
        assert_eq!(rush_e.charts[2].difficulty_level, DifficultyLevel::IVAlpha);
        assert_eq!(rush_e.jacket_id(DifficultyLevel::IV), "rush-e_IV");
        assert_eq!(rush_e.jacket_id(DifficultyLevel::I), "rush-e");

        let quiet = &songs[1];
        assert_eq!(quiet.jacket_id(DifficultyLevel::IV), "quiet");
        assert_eq!(quiet.source_localized.as_ref().map(|s| s.default.as_str()), Some("Original"));
    }

    #[test]
    fn test_unknown_rating_class_fails() {
        let json = r#"{ "songs": [{
            "id": "x", "artist": "y", "title_localized": { "default": "X" }, "release_version": "1",
            "difficulties": [{ "ratingClass": 4, "ratingReal": 1.0, "chartDesigner": "", "jacketDesigner": "" }]
        }] }"#;

        assert!(matches!(songs_from_wiki_json(json), Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_catalog_from_wiki_json() {
        let catalog = Catalog::from_wiki_json(WIKI_JSON).unwrap();
        assert!(catalog.chart("quiet", DifficultyLevel::IV).is_some());
    }
}
