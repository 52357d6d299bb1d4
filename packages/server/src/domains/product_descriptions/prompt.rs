//! Refinement prompt template.

use super::normalize::NormalizedDataset;

/// Render the refinement prompt for `dataset`.
///
/// The dataset is embedded as a JSON array of feature lists so the rendering
/// is deterministic for a given input.
pub fn build_prompt(dataset: &NormalizedDataset) -> String {
    let listing = render_listing(dataset);

    format!(
        "Analyze the following product description data and return the product descriptions you consider necessary.
Requirements:
1. Keep the original format (items separated by |)
2. Return only the processed result, without any other explanation
3. Remove duplicate, redundant or unnecessary information
4. Keep the core product features and key information

Original data:
{listing}

Return the processed result directly:
"
    )
}

fn render_listing(dataset: &NormalizedDataset) -> String {
    serde_json::to_string(dataset).unwrap_or_else(|_| format!("{:?}", dataset))
}
