//! Session-local puzzle state.

use crate::selection::SelectionState;
use crate::types::Category;
use serde::{Deserialize, Serialize};

/// Mistake budget for a fresh session.
pub const MISTAKE_BUDGET: u8 = 4;

/// Phase of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Guesses are being accepted.
    Playing,
    /// All categories found.
    Won,
    /// Mistake budget exhausted.
    Lost,
}

impl Phase {
    /// Whether the session has ended. Terminal phases accept no further
    /// gameplay mutation; only a restart leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Mutable state of one puzzle session.
///
/// Owned exclusively by [`GameEngine`](crate::GameEngine); collaborators read
/// it through the accessors and never mutate it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Words still on the board, in display order.
    pub(crate) board: Vec<String>,
    /// The in-progress guess.
    pub(crate) selection: SelectionState,
    /// Solved categories in discovery order.
    pub(crate) found: Vec<Category>,
    /// Wrong guesses left before the session is lost.
    pub(crate) mistakes_remaining: u8,
    /// Current phase.
    pub(crate) phase: Phase,
}

impl PuzzleState {
    /// Creates a fresh session over an already-shuffled board.
    pub(crate) fn new(board: Vec<String>) -> Self {
        Self {
            board,
            selection: SelectionState::new(),
            found: Vec::new(),
            mistakes_remaining: MISTAKE_BUDGET,
            phase: Phase::Playing,
        }
    }

    /// Words still on the board, in display order.
    pub fn board(&self) -> &[String] {
        &self.board
    }

    /// The in-progress guess.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Solved categories in discovery order.
    pub fn found(&self) -> &[Category] {
        &self.found
    }

    /// Wrong guesses left before the session is lost.
    pub fn mistakes_remaining(&self) -> u8 {
        self.mistakes_remaining
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
