use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::model::structures::enriched_record::EnrichedRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to encode title: {0}")]
    TitleError(#[from] serde_json::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error)
}

/// Writes one `"title",level,achievement rate,rating` row per record, in the
/// order given. No header. Only the title is quoted, using JSON string escaping.
pub fn export_csv(records: &[EnrichedRecord]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    for r in records {
        let title = serde_json::to_string(r.song.title())?;

        writer.write_record([
            title,
            r.record.difficulty_level.to_string(),
            r.record.achievement_rate.to_string(),
            r.rating.to_string()
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::CsvError(e.into_error().into()))?;
    let mut csv = String::from_utf8(bytes)?;

    // Rows are joined by newlines, without a trailing one
    if csv.ends_with('\n') {
        csv.pop();
    }

    Ok(csv)
}
