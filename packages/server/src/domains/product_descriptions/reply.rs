//! Reading the generation service's reply back into feature lists.

use thiserror::Error;

use super::normalize::{split_features, NormalizedRecord, DELIMITER};

/// Markdown code fence marker.
const FENCE: &str = "```";

/// Feature lists parsed from a generated reply.
///
/// Lines may have been merged, dropped or reordered by the service, so there
/// is no positional correspondence with the dataset that was sent.
pub type RefinedDataset = Vec<NormalizedRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyParseError {
    #[error("reply is an opening code fence with no body")]
    UnterminatedFence,
}

/// Parse a reply into one record per non-blank line.
///
/// An opening fence line (with or without a language tag) and a closing fence
/// line are removed first. Lines containing the delimiter are split like cell
/// text; other lines become single-feature records. Blank lines produce no
/// record at all.
pub fn parse_reply(reply: &str) -> Result<RefinedDataset, ReplyParseError> {
    let mut body = reply.trim();

    if body.starts_with(FENCE) {
        body = body
            .split_once('\n')
            .map(|(_, rest)| rest)
            .ok_or(ReplyParseError::UnterminatedFence)?;
    }
    if body.ends_with(FENCE) {
        body = body.rsplit_once('\n').map(|(head, _)| head).unwrap_or("");
    }

    Ok(body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.contains(DELIMITER) {
                split_features(line)
            } else {
                vec![line.to_string()]
            }
        })
        .collect())
}
