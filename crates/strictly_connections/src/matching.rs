//! Guess evaluation against the hidden partition.

use crate::selection::SELECTION_LIMIT;
use crate::types::Category;
use tracing::instrument;

/// Result of evaluating a four-word guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The guess equals an unfound category's word set exactly.
    Correct(Category),
    /// No unfound category matches the guess.
    Incorrect,
}

/// Error raised when evaluation is invoked with a partial guess. Defensive;
/// the engine guards the selection size before calling.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// The selection does not hold exactly four words.
    #[display("Expected a selection of {} words, got {}", SELECTION_LIMIT, _0)]
    IncompleteSelection(usize),
}

impl std::error::Error for MatchError {}

/// Evaluates a guess against the categories not yet found.
///
/// Scans categories in source order and returns the first unfound category
/// whose word set equals `selection` exactly. A guess with three correct
/// words and one stray is `Incorrect`.
///
/// # Errors
///
/// Returns [`MatchError::IncompleteSelection`] when `selection` does not hold
/// exactly four words.
#[instrument(skip(categories, already_found), fields(selected = selection.len()))]
pub fn evaluate(
    selection: &[String],
    categories: &[Category],
    already_found: &[&str],
) -> Result<MatchResult, MatchError> {
    if selection.len() != SELECTION_LIMIT {
        return Err(MatchError::IncompleteSelection(selection.len()));
    }

    for category in categories {
        if already_found.contains(&category.name().as_str()) {
            continue;
        }

        // Both sides hold four unique words, so containment at equal size
        // is set equality.
        if selection.iter().all(|word| category.contains(word)) {
            return Ok(MatchResult::Correct(category.clone()));
        }
    }

    Ok(MatchResult::Incorrect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorTag;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(
                "SHADES OF PINK",
                ["BLUSH", "ROSE", "MAUVE", "FUCHSIA"],
                ColorTag::Yellow,
                1,
            ),
            Category::new(
                "BIRTHDAY THINGS",
                ["CAKE", "CANDLES", "BALLOONS", "GIFTS"],
                ColorTag::Green,
                2,
            ),
        ]
    }

    fn words(items: [&str; 4]) -> Vec<String> {
        items.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_match_is_correct() {
        let selection = words(["ROSE", "FUCHSIA", "BLUSH", "MAUVE"]);

        let result = evaluate(&selection, &categories(), &[]).expect("full selection");
        match result {
            MatchResult::Correct(category) => assert_eq!(category.name(), "SHADES OF PINK"),
            MatchResult::Incorrect => panic!("expected a correct match"),
        }
    }

    #[test]
    fn test_three_plus_one_is_incorrect() {
        let selection = words(["BLUSH", "ROSE", "MAUVE", "CAKE"]);

        let result = evaluate(&selection, &categories(), &[]).expect("full selection");
        assert_eq!(result, MatchResult::Incorrect);
    }

    #[test]
    fn test_found_categories_are_skipped() {
        let selection = words(["BLUSH", "ROSE", "MAUVE", "FUCHSIA"]);

        let result =
            evaluate(&selection, &categories(), &["SHADES OF PINK"]).expect("full selection");
        assert_eq!(result, MatchResult::Incorrect);
    }

    #[test]
    fn test_partial_selection_is_rejected() {
        let selection = words(["BLUSH", "ROSE", "MAUVE", "FUCHSIA"]);

        let result = evaluate(&selection[..3], &categories(), &[]);
        assert_eq!(result, Err(MatchError::IncompleteSelection(3)));
    }
}
