use crate::utils::error::{BotError, Result};
use std::collections::HashMap;

/// Parses a score line of the form `subject1 score1, subject2 score2, ...`.
///
/// Each comma-separated segment must contain exactly two
/// whitespace-separated tokens, the second of which must parse as an
/// integer. The last occurrence wins when a subject repeats.
pub fn parse_scores(text: &str) -> Result<HashMap<String, i32>> {
    let mut scores = HashMap::new();

    for segment in text.split(',') {
        let mut tokens = segment.split_whitespace();
        let (subject, value) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(subject), Some(value), None) => (subject, value),
            _ => {
                return Err(BotError::FormatError {
                    message: format!("expected `subject score`, got `{}`", segment.trim()),
                });
            }
        };

        let score: i32 = value.parse().map_err(|_| BotError::FormatError {
            message: format!("`{}` is not an integer score", value),
        })?;

        scores.insert(subject.to_string(), score);
    }

    Ok(scores)
}
