//! Product descriptions domain - reading, cleaning and refining the
//! description column of an uploaded order sheet.
//!
//! # Components
//!
//! - `region`: locates the description cells (column F from row 17 down)
//! - `normalize`: splits `|`-separated cells into feature lists
//! - `prompt`: renders the refinement prompt
//! - `reply`: parses the generated reply back into feature lists
//! - `actions`: `refine` (with fallback) and `summarize` (whole pipeline)
//! - `data`: the summary record returned to the HTTP layer

pub mod actions;
pub mod data;
pub mod normalize;
pub mod prompt;
pub mod region;
pub mod reply;

// Re-exports
pub use actions::{refine, summarize};
pub use data::DescriptionSummary;
pub use normalize::{normalize, split_features, NormalizedDataset, NormalizedRecord, DELIMITER};
pub use prompt::build_prompt;
pub use region::{extract, extract_region, ExtractionError, Region, DESCRIPTION_REGION};
pub use reply::{parse_reply, RefinedDataset, ReplyParseError};
