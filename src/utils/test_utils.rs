use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Once;
use strum::IntoEnumIterator;

use crate::{
    catalog::{
        structs::{Chart, LocalizedString, Song},
        Catalog
    },
    model::{
        constants::MAX_ACHIEVEMENT_RATE,
        structures::{chart_record::ChartRecord, difficulty_level::DifficultyLevel}
    }
};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

pub fn generate_chart(difficulty_level: DifficultyLevel, difficulty_decimal: f64) -> Chart {
    Chart {
        difficulty_level,
        difficulty_decimal,
        override_jacket_id: None,
        chart_designer: "Chart Designer".to_string(),
        jacket_designer: "Jacket Designer".to_string()
    }
}

pub fn generate_song(id: &str, charts: &[(DifficultyLevel, f64)]) -> Song {
    Song {
        id: id.to_string(),
        artist: format!("Artist of {}", id),
        release_version: "1.0.0".to_string(),
        title_localized: LocalizedString::new(format!("Title of {}", id)),
        source_localized: None,
        charts: charts.iter().map(|(level, decimal)| generate_chart(*level, *decimal)).collect()
    }
}

/// A catalog of `n_songs` songs, each with every difficulty level.
/// The first chart of each song has a distinct difficulty decimal.
pub fn generate_catalog(n_songs: usize) -> Catalog {
    let songs = (0..n_songs)
        .map(|i| {
            let charts = DifficultyLevel::iter()
                .enumerate()
                .map(|(k, level)| {
                    let decimal = 1.0 + 0.1 * i as f64 + 1.5 * k as f64;
                    (level, (decimal * 10.0).round() / 10.0)
                })
                .collect::<Vec<_>>();

            generate_song(&format!("song-{:03}", i), &charts)
        })
        .collect();

    // Generated ids are unique
    Catalog::new(songs).unwrap_or_default()
}

/// Up to `n` records on distinct charts of the catalog with random achievement rates.
/// Seeded, so the same arguments always produce the same records.
pub fn generate_records(catalog: &Catalog, n: usize, seed: u64) -> Vec<ChartRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut charts = catalog
        .songs()
        .iter()
        .flat_map(|s| s.charts.iter().map(move |c| (s.id.clone(), c.difficulty_level)))
        .collect::<Vec<_>>();
    charts.shuffle(&mut rng);

    charts
        .into_iter()
        .take(n)
        .map(|(song_id, level)| ChartRecord::new(song_id, level, rng.random_range(0..=MAX_ACHIEVEMENT_RATE)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_records_deterministic() {
        let catalog = generate_catalog(10);

        assert_eq!(generate_records(&catalog, 20, 42), generate_records(&catalog, 20, 42));
        assert_eq!(generate_records(&catalog, 100, 42).len(), 50);
    }
}
