use std::{fmt, fs, io, path::Path};

use indicatif::ProgressIterator;
use thiserror::Error;
use tracing::info;

use crate::{
    args::Args,
    catalog::{Catalog, CatalogError},
    export::{export_csv, ExportError},
    import::{parse_import, ImportError},
    model::{
        aggregation::{aggregate_with_policy, best_records, AggregationError},
        record_tracker::{ImportMode, ImportStats, RecordTracker},
        structures::{
            chart_record::ChartRecord, difficulty_level::DifficultyLevel, orphan_policy::OrphanPolicy,
            rating_summary::RatingSummary, rating_tier::RatingTier
        },
        summary::summarize
    },
    utils::progress_utils::progress_bar
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    CatalogError(#[from] CatalogError),

    #[error("Failed to access {path}: {source}")]
    IoError { path: String, source: io::Error },

    #[error("Stored records are corrupt: {0}")]
    RecordsError(#[source] serde_json::Error),

    #[error("Failed to serialize records: {0}")]
    SaveError(#[source] serde_json::Error),

    #[error("Import failed: {0}")]
    ImportError(#[from] ImportError),

    #[error(transparent)]
    AggregationError(#[from] AggregationError),

    #[error(transparent)]
    ExportError(#[from] ExportError)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> AppError {
    let path = path.display().to_string();
    move |source| AppError::IoError { path, source }
}

/// One row of the best 30 listing
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub title: String,
    pub difficulty_level: DifficultyLevel,
    pub difficulty_decimal: f64,
    pub achievement_rate: u32,
    pub rating: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub total_records: usize,
    pub import: Option<ImportStats>,
    pub summary: RatingSummary,
    pub tier: Option<RatingTier>,
    pub best: Vec<RankedRow>
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier {
            Some(tier) => writeln!(f, "Rating: {:.3} (tier {})", self.summary.rating, tier.tier)?,
            None => writeln!(f, "Rating: {:.3}", self.summary.rating)?
        }
        writeln!(
            f,
            "Records: {}  min {:.3}  avg {:.3}  max {:.3}",
            self.total_records, self.summary.min, self.summary.avg, self.summary.max
        )?;

        for row in &self.best {
            writeln!(
                f,
                "#{:<3} {:<40} {:<5} {:>5.1} {:>8} {:>8.4}",
                row.rank, row.title, row.difficulty_level, row.difficulty_decimal, row.achievement_rate, row.rating
            )?;
        }

        Ok(())
    }
}

/// Loads the stored records, normalizing them. A missing file is an empty record set.
pub fn load_records(path: &Path) -> Result<RecordTracker, AppError> {
    if !path.exists() {
        info!("No records at {}, starting empty", path.display());
        return Ok(RecordTracker::new());
    }

    let content = fs::read_to_string(path).map_err(io_error(path))?;
    let records: Vec<ChartRecord> = serde_json::from_str(&content).map_err(AppError::RecordsError)?;

    info!("Loaded {} records from {}", records.len(), path.display());

    Ok(RecordTracker::from_records(records))
}

pub fn save_records(path: &Path, tracker: &RecordTracker) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(&tracker.to_records()).map_err(AppError::SaveError)?;
    fs::write(path, content).map_err(io_error(path))?;

    info!("Saved {} records to {}", tracker.len(), path.display());

    Ok(())
}

fn load_catalog(args: &Args) -> Result<Catalog, AppError> {
    if args.wiki_catalog {
        let content = fs::read_to_string(&args.catalog).map_err(io_error(&args.catalog))?;
        return Ok(Catalog::from_wiki_json(&content)?);
    }

    Ok(Catalog::from_path(&args.catalog)?)
}

/// Loads the catalog and records, applies the import if any, then rates everything.
pub fn run(args: &Args) -> Result<RunReport, AppError> {
    let catalog = load_catalog(args)?;
    let mut tracker = load_records(&args.records)?;

    let import = match &args.import {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(io_error(path))?;
            let records = parse_import(&content)?;
            let mode = if args.replace {
                ImportMode::Replace
            } else {
                ImportMode::Merge
            };

            let bar = progress_bar(records.len() as u64, "Merging imported records".to_string());
            let stats = tracker.import(records.into_iter().progress_with(bar.clone()), mode);
            bar.finish_and_clear();

            save_records(&args.records, &tracker)?;

            Some(stats)
        }
        None => None
    };

    let policy = if args.skip_orphans {
        OrphanPolicy::Skip
    } else {
        OrphanPolicy::Fail
    };

    let records = tracker.to_records();
    let enriched = aggregate_with_policy(&records, &catalog, policy)?;
    let summary = summarize(&enriched);

    if let Some(path) = &args.export {
        fs::write(path, export_csv(&enriched)?).map_err(io_error(path))?;
        info!("Exported {} records to {}", enriched.len(), path.display());
    }

    let best = best_records(&enriched)
        .into_iter()
        .map(|r| RankedRow {
            rank: r.rating_index.unwrap_or_default() + 1,
            title: r.song.title().to_string(),
            difficulty_level: r.record.difficulty_level,
            difficulty_decimal: r.chart.difficulty_decimal,
            achievement_rate: r.record.achievement_rate,
            rating: r.rating
        })
        .collect();

    Ok(RunReport {
        total_records: enriched.len(),
        import,
        tier: RatingTier::for_rating(summary.rating),
        summary,
        best
    })
}
