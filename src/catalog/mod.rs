use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;
use tracing::{debug, info};

use crate::model::structures::difficulty_level::DifficultyLevel;

use self::structs::{Chart, Song};

pub mod structs;
pub mod wiki;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Song {0} appears more than once in the catalog")]
    DuplicateSongError(String)
}

/// Read-only song catalog with an index by song id.
///
/// Owned by the application root and passed by reference into
/// aggregation and export. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    index: HashMap<String, usize>
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Result<Catalog, CatalogError> {
        let mut index = HashMap::with_capacity(songs.len());

        for (i, song) in songs.iter().enumerate() {
            if index.insert(song.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSongError(song.id.clone()));
            }
        }

        debug!("Catalog indexed with {} songs", songs.len());

        Ok(Catalog { songs, index })
    }

    /// Parses the bundled catalog JSON (an array of songs)
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let songs: Vec<Song> = serde_json::from_str(json)?;
        Catalog::new(songs)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Catalog::from_json(&content)?;

        info!("Loaded {} songs from {}", catalog.len(), path.as_ref().display());

        Ok(catalog)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn song(&self, song_id: &str) -> Option<&Song> {
        self.index.get(song_id).map(|i| &self.songs[*i])
    }

    /// Resolves a (song, difficulty level) reference
    pub fn chart(&self, song_id: &str, difficulty_level: DifficultyLevel) -> Option<(&Song, &Chart)> {
        let song = self.song(song_id)?;
        let chart = song.chart(difficulty_level)?;

        Some((song, chart))
    }
}
