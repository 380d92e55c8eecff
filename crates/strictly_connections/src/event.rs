//! Events emitted by the engine for a rendering collaborator.

use crate::types::Category;
use serde::{Deserialize, Serialize};

/// State-change notification for a rendering collaborator.
///
/// The engine queues these as it mutates state; the renderer drains them and
/// updates the display. The engine never touches presentation directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board layout or selection changed; redraw the word grid.
    BoardRendered {
        /// Words on the board, in display order.
        words: Vec<String>,
        /// Currently selected words, in selection order.
        selected: Vec<String>,
    },
    /// Whether a guess can currently be submitted.
    SubmitEnabledChanged(bool),
    /// The mistake budget changed.
    MistakesChanged(u8),
    /// A category was solved; display its name, words, and color.
    CategorySolved(Category),
    /// A four-word guess missed; show transient shake feedback on these words.
    WrongGuess(Vec<String>),
    /// The session reached a terminal phase.
    GameEnded {
        /// Whether the player found all categories.
        won: bool,
        /// Categories never found, revealed on loss. Empty on a win.
        remaining: Vec<Category>,
    },
}
