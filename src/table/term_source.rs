use crate::{CResult, ScrapeError};
use log::info;
use std::path::Path;

/// Reads every value of column `colname` from the csv file at `path`, in row order.
///
/// Cells are taken verbatim, empty cells included.
pub fn load_terms<P: AsRef<Path>>(path: P, colname: &str) -> CResult<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ScrapeError::InputFileNotFound(path.to_path_buf()));
    }
    let unreadable = |source: csv::Error| ScrapeError::InputTable {
        file: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(unreadable)?;

    let column = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .position(|h| h == colname)
        .ok_or_else(|| ScrapeError::ColumnNotFound {
            column: colname.to_string(),
            file: path.to_path_buf(),
        })?;

    let mut terms = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        terms.push(record.get(column).unwrap_or_default().to_string());
    }
    info!("Loaded {} terms from column {colname} of {}", terms.len(), path.display());
    Ok(terms)
}
