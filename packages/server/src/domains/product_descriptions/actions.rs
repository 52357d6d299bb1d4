//! Product description actions - the extraction and refinement pipeline
//!
//! ```text
//! Table → extract → normalize → build_prompt → generate → parse_reply
//!                        └──────────── fallback on any failure ────┘
//! ```

use chat_client::GenerationOptions;
use tracing::{info, warn};

use super::data::DescriptionSummary;
use super::normalize::{normalize, NormalizedDataset};
use super::prompt::build_prompt;
use super::region::{extract, ExtractionError};
use super::reply::{parse_reply, RefinedDataset};
use crate::common::Table;
use crate::kernel::BaseTextGenerator;

/// Ask the generation service to deduplicate and tighten `dataset`.
///
/// Never fails: when generation or reply parsing fails the original dataset
/// is returned unchanged.
pub async fn refine(
    dataset: &NormalizedDataset,
    generator: &dyn BaseTextGenerator,
    options: &GenerationOptions,
) -> RefinedDataset {
    let prompt = build_prompt(dataset);

    let reply = match generator.generate(&prompt, options).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(
                error = %e,
                kind = e.kind(),
                "Refinement failed, using original product descriptions"
            );
            return dataset.clone();
        }
    };

    match parse_reply(&reply) {
        Ok(refined) => {
            info!(
                original = dataset.len(),
                refined = refined.len(),
                "Refined product descriptions"
            );
            refined
        }
        Err(e) => {
            warn!(
                error = %e,
                reply_preview = %reply.chars().take(200).collect::<String>(),
                "Unusable refinement reply, using original product descriptions"
            );
            dataset.clone()
        }
    }
}

/// Run the whole pipeline for one uploaded table.
///
/// Only a missing description region aborts; refinement problems degrade to
/// the normalized data.
pub async fn summarize(
    table: &Table,
    generator: &dyn BaseTextGenerator,
    options: &GenerationOptions,
) -> Result<DescriptionSummary, ExtractionError> {
    let raw = extract(table)?;
    let product_descriptions = normalize(&raw);
    let product_descriptions_ai = refine(&product_descriptions, generator, options).await;

    Ok(DescriptionSummary {
        total_rows: table.row_count(),
        total_columns: table.column_count(),
        product_descriptions_count: product_descriptions.len(),
        product_descriptions,
        product_descriptions_ai,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{GenerationError, MockTextGenerator};

    fn dataset() -> NormalizedDataset {
        vec![
            vec!["red".to_string(), "large".to_string(), "red".to_string()],
            vec![],
            vec!["blue".to_string()],
        ]
    }

    #[tokio::test]
    async fn refine_parses_successful_reply() {
        let generator = MockTextGenerator::new().with_response("```\nred | large\nblue\n```");

        let refined = refine(&dataset(), &generator, &GenerationOptions::for_refinement()).await;

        assert_eq!(refined, vec![vec!["red", "large"], vec!["blue"]]);
        assert_eq!(generator.call_count(), 1);
        assert!(generator.last_prompt().unwrap().contains(r#"["red","large","red"]"#));
    }

    #[tokio::test]
    async fn refine_passes_options_through() {
        let generator = MockTextGenerator::new().with_response("a");
        let options = GenerationOptions::for_refinement().model("deepseek-reasoner");

        refine(&dataset(), &generator, &options).await;

        assert_eq!(generator.last_options(), Some(options));
    }

    #[tokio::test]
    async fn refine_falls_back_on_every_generation_error() {
        let errors = vec![
            GenerationError::Network("connection refused".into()),
            GenerationError::Status {
                status: 503,
                body: "overloaded".into(),
            },
            GenerationError::Parse("expected value".into()),
            GenerationError::EmptyChoices,
        ];

        for error in errors {
            let generator = MockTextGenerator::failing(error);

            let refined = refine(&dataset(), &generator, &GenerationOptions::default()).await;

            assert_eq!(refined, dataset());
        }
    }

    #[tokio::test]
    async fn refine_falls_back_on_unparseable_reply() {
        let generator = MockTextGenerator::new().with_response("```");

        let refined = refine(&dataset(), &generator, &GenerationOptions::default()).await;

        assert_eq!(refined, dataset());
    }

    #[tokio::test]
    async fn empty_reply_is_not_a_fallback() {
        let generator = MockTextGenerator::new().with_response("");

        let refined = refine(&dataset(), &generator, &GenerationOptions::default()).await;

        assert!(refined.is_empty());
    }
}
