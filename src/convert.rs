use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::decode;
use crate::document::Document;
use crate::error::ConvertError;
use crate::table::Table;

/// Source and destination of the single conversion.
#[derive(Debug, Clone)]
pub struct Config {
    pub csv_file_path: PathBuf,
    pub json_file_path: PathBuf,
}

/// Counts from a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub columns: usize,
}

/// Run the whole conversion: read + decode the CSV, fill missing cells, wrap
/// the rows under `data`, and write the rendered JSON.
///
/// The document is rendered fully in memory before the output file is
/// created, so a failed conversion never leaves a partial file behind.
pub fn convert(config: &Config) -> Result<Summary, ConvertError> {
    let text = decode::read_latin1(&config.csv_file_path)?;

    let mut table = Table::parse(&text)?;
    table.fill_missing();
    let summary = Summary {
        rows: table.rows.len(),
        columns: table.columns.len(),
    };

    let rendered = Document::from_table(table).render();
    fs::write(&config.json_file_path, &rendered)
        .map_err(|e| ConvertError::file_access(&config.json_file_path, e))?;

    info!(
        rows = summary.rows,
        columns = summary.columns,
        output = %config.json_file_path.display(),
        "conversion complete"
    );
    Ok(summary)
}
