//! Splitting raw description cells into feature lists.

use tracing::debug;

use crate::common::Cell;

/// Separator between features inside one description cell.
pub const DELIMITER: char = '|';

/// One description split into trimmed, non-empty features.
pub type NormalizedRecord = Vec<String>;

/// One [`NormalizedRecord`] per extracted cell, in extraction order.
pub type NormalizedDataset = Vec<NormalizedRecord>;

/// Split `text` on [`DELIMITER`], trimming each piece and dropping empty ones.
pub fn split_features(text: &str) -> NormalizedRecord {
    text.split(DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize every raw cell. The output always has one record per input
/// cell, even when a cell yields no features.
pub fn normalize(raw: &[Cell]) -> NormalizedDataset {
    let dataset: NormalizedDataset = raw.iter().map(|cell| split_features(&cell.to_text())).collect();

    debug!(records = dataset.len(), ?dataset, "Normalized product descriptions");

    dataset
}
