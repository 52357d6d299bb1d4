//! Output record of the product-description pipeline.

use serde::Serialize;

use super::normalize::NormalizedDataset;
use super::reply::RefinedDataset;

/// Summary of one uploaded sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub product_descriptions: NormalizedDataset,
    pub product_descriptions_ai: RefinedDataset,
    pub product_descriptions_count: usize,
}
