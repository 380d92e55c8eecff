//! Player selection tracking for the in-progress guess.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Maximum number of words in an in-progress guess.
pub const SELECTION_LIMIT: usize = 4;

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The word was added to the selection.
    Added,
    /// The word was already selected and has been removed.
    Removed,
    /// The selection is full and the word was not in it; nothing changed.
    Ignored,
}

/// Error raised when a selection request references a word that is not on
/// the board. Indicates a caller/UI synchronization bug, not a player error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SelectionError {
    /// The word is not among the remaining board words.
    #[display("Word {:?} is not on the board", _0)]
    WordNotOnBoard(String),
}

impl std::error::Error for SelectionError {}

/// The player's current in-progress guess: an ordered subset of the board,
/// capped at [`SELECTION_LIMIT`] words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    chosen: Vec<String>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a word: removes it if selected, otherwise appends it when the
    /// selection has room and the word is on the board.
    ///
    /// Removal is always allowed, even at the cap. Adding to a full selection
    /// is silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::WordNotOnBoard`] when the word is absent from
    /// `board`.
    #[instrument(skip(self, board))]
    pub fn toggle(&mut self, word: &str, board: &[String]) -> Result<Toggle, SelectionError> {
        if let Some(index) = self.chosen.iter().position(|w| w == word) {
            self.chosen.remove(index);
            debug!(word, count = self.chosen.len(), "removed word from selection");
            return Ok(Toggle::Removed);
        }

        if !board.iter().any(|w| w == word) {
            return Err(SelectionError::WordNotOnBoard(word.to_string()));
        }

        if self.chosen.len() >= SELECTION_LIMIT {
            debug!(word, "selection full, toggle ignored");
            return Ok(Toggle::Ignored);
        }

        self.chosen.push(word.to_string());
        debug!(word, count = self.chosen.len(), "added word to selection");
        Ok(Toggle::Added)
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Number of selected words.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Whether the selection holds a full guess.
    pub fn is_full(&self) -> bool {
        self.chosen.len() == SELECTION_LIMIT
    }

    /// Whether the word is currently selected.
    pub fn contains(&self, word: &str) -> bool {
        self.chosen.iter().any(|w| w == word)
    }

    /// Selected words in selection order.
    pub fn words(&self) -> &[String] {
        &self.chosen
    }
}
