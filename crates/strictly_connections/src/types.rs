//! Core domain types for the word-grouping puzzle.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// Number of words in every category.
pub const WORDS_PER_CATEGORY: usize = 4;

/// Number of categories in every puzzle.
pub const CATEGORY_COUNT: usize = 4;

/// Color tier shown when a category is revealed.
///
/// Tiers follow the conventional difficulty ordering, yellow easiest
/// through purple hardest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorTag {
    /// Easiest tier.
    Yellow,
    /// Second tier.
    Green,
    /// Third tier.
    Blue,
    /// Hardest tier.
    Purple,
}

/// A named group of exactly four words sharing a hidden theme.
///
/// Immutable for the session. Constructed with a fixed-size word array so
/// the four-word shape holds at the type level; deserialized categories are
/// re-validated by [`Puzzle::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Category {
    /// Display name of the category.
    name: String,
    /// The four member words.
    words: Vec<String>,
    /// Color tier for reveal display.
    color: ColorTag,
    /// Difficulty rank, 1 (easiest) through 4.
    difficulty: u8,
}

impl Category {
    /// Creates a category from its display name and four member words.
    pub fn new(
        name: impl Into<String>,
        words: [&str; WORDS_PER_CATEGORY],
        color: ColorTag,
        difficulty: u8,
    ) -> Self {
        Self {
            name: name.into(),
            words: words.iter().map(|w| w.to_string()).collect(),
            color,
            difficulty,
        }
    }

    /// Checks whether `word` belongs to this category.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Error raised when a puzzle fails construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// The puzzle does not have exactly four categories.
    #[display("Expected {} categories, got {}", CATEGORY_COUNT, _0)]
    CategoryCount(usize),

    /// A category does not have exactly four words.
    #[display("Category {:?} has {} words, expected {}", category, count, WORDS_PER_CATEGORY)]
    WordCount {
        /// Name of the offending category.
        category: String,
        /// Number of words it carries.
        count: usize,
    },

    /// The same word appears in more than one slot across the puzzle.
    #[display("Word {:?} appears more than once", _0)]
    DuplicateWord(String),
}

impl std::error::Error for PuzzleError {}

/// A complete puzzle: four categories whose words form sixteen unique tiles.
///
/// This is the puzzle-source boundary. Validation happens once here; the
/// engine assumes the invariant afterward and never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    categories: Vec<Category>,
}

impl Puzzle {
    /// Builds a puzzle, validating category count, per-category word count,
    /// and global word uniqueness.
    #[instrument(skip(categories))]
    pub fn new(categories: Vec<Category>) -> Result<Self, PuzzleError> {
        if categories.len() != CATEGORY_COUNT {
            return Err(PuzzleError::CategoryCount(categories.len()));
        }

        for category in &categories {
            if category.words().len() != WORDS_PER_CATEGORY {
                return Err(PuzzleError::WordCount {
                    category: category.name().clone(),
                    count: category.words().len(),
                });
            }
        }

        // Global uniqueness also covers duplicates within one category.
        let mut seen = HashSet::new();
        for category in &categories {
            for word in category.words() {
                if !seen.insert(word.as_str()) {
                    return Err(PuzzleError::DuplicateWord(word.clone()));
                }
            }
        }

        Ok(Self { categories })
    }

    /// Returns the categories in source order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns all sixteen words in category source order.
    pub fn all_words(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.words().iter().cloned())
            .collect()
    }

    /// Finds a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_categories() -> Vec<Category> {
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
            Category::new(
                "WORDS THAT PRECEDE \"PINK\"",
                ["HOT", "THINK", "TICKLED", "INK"],
                ColorTag::Blue,
                3,
            ),
            Category::new(
                "TERMS OF ENDEARMENT",
                ["BABE", "LOVE", "DEAR", "ANGEL"],
                ColorTag::Purple,
                4,
            ),
        ]
    }

    #[test]
    fn test_puzzle_accepts_valid_categories() {
        let puzzle = Puzzle::new(sample_categories()).expect("valid puzzle");
        assert_eq!(puzzle.categories().len(), CATEGORY_COUNT);
        assert_eq!(puzzle.all_words().len(), CATEGORY_COUNT * WORDS_PER_CATEGORY);
    }

    #[test]
    fn test_puzzle_rejects_wrong_category_count() {
        let mut categories = sample_categories();
        categories.pop();

        let result = Puzzle::new(categories);
        assert_eq!(result, Err(PuzzleError::CategoryCount(3)));
    }

    #[test]
    fn test_puzzle_rejects_duplicate_word_across_categories() {
        let mut categories = sample_categories();
        categories[1] = Category::new(
            "BIRTHDAY THINGS",
            ["CAKE", "CANDLES", "BALLOONS", "ROSE"],
            ColorTag::Green,
            2,
        );

        let result = Puzzle::new(categories);
        assert_eq!(result, Err(PuzzleError::DuplicateWord("ROSE".to_string())));
    }

    #[test]
    fn test_category_contains_is_exact() {
        let category = &sample_categories()[0];
        assert!(category.contains("BLUSH"));
        assert!(!category.contains("BLUS"));
        assert!(!category.contains("CAKE"));
    }

    #[test]
    fn test_puzzle_round_trips_through_json() {
        let puzzle = Puzzle::new(sample_categories()).expect("valid puzzle");
        let json = serde_json::to_string(&puzzle).expect("serialize");
        let back: Puzzle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(puzzle, back);
    }
}
