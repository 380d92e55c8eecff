//! Puzzle sources: the built-in puzzle and JSON file loading.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_connections::{Category, ColorTag, Puzzle};
use tracing::info;

/// Returns the built-in puzzle.
pub fn builtin_puzzle() -> Puzzle {
    Puzzle::new(vec![
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
    ])
    .expect("built-in puzzle is well formed")
}

/// Loads a puzzle from a JSON file holding an array of categories:
///
/// ```json
/// [
///   {
///     "name": "SHADES OF PINK",
///     "words": ["BLUSH", "ROSE", "MAUVE", "FUCHSIA"],
///     "color": "yellow",
///     "difficulty": 1
///   }
/// ]
/// ```
///
/// Validation (four categories, four unique words each, sixteen unique words
/// overall) happens in [`Puzzle::new`].
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading puzzle file {}", path.display()))?;
    let categories: Vec<Category> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing puzzle file {}", path.display()))?;

    let puzzle = Puzzle::new(categories)?;
    info!(path = %path.display(), "loaded puzzle file");
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_puzzle_is_valid() {
        let puzzle = builtin_puzzle();
        assert_eq!(puzzle.categories().len(), 4);
        assert_eq!(puzzle.all_words().len(), 16);
    }

    #[test]
    fn test_load_puzzle_rejects_malformed_files() {
        let dir = std::env::temp_dir();
        let path = dir.join("strictly_connections_bad_puzzle.json");
        std::fs::write(&path, "[{\"name\": \"ONLY ONE\"}]").expect("write temp file");

        assert!(load_puzzle(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
