//! First-class invariants for the puzzle session.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system
//! guarantees.

use crate::selection::SELECTION_LIMIT;
use crate::state::{MISTAKE_BUDGET, Phase, PuzzleState};
use std::collections::HashSet;
use tracing::warn;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Invariant: the selection is a duplicate-free subset of the board, at most
/// four words.
pub struct SelectionOnBoard;

impl Invariant<PuzzleState> for SelectionOnBoard {
    fn holds(state: &PuzzleState) -> bool {
        let selected = state.selection().words();

        if selected.len() > SELECTION_LIMIT {
            warn!(count = selected.len(), "selection exceeds limit");
            return false;
        }

        let unique: HashSet<&str> = selected.iter().map(|w| w.as_str()).collect();
        if unique.len() != selected.len() {
            warn!("selection contains duplicates");
            return false;
        }

        let on_board = selected
            .iter()
            .all(|word| state.board().iter().any(|w| w == word));
        if !on_board {
            warn!("selection references a word not on the board");
        }
        on_board
    }

    fn description() -> &'static str {
        "Selection is a duplicate-free subset of the board, at most four words"
    }
}

/// Invariant: no board word belongs to an already-found category.
pub struct FoundDisjoint;

impl Invariant<PuzzleState> for FoundDisjoint {
    fn holds(state: &PuzzleState) -> bool {
        let disjoint = !state
            .board()
            .iter()
            .any(|word| state.found().iter().any(|c| c.contains(word)));
        if !disjoint {
            warn!("board still holds a word from a found category");
        }
        disjoint
    }

    fn description() -> &'static str {
        "Board words and found-category words are disjoint"
    }
}

/// Invariant: the mistake budget never exceeds four, and a lost session has
/// exhausted it.
pub struct MistakesWithinBudget;

impl Invariant<PuzzleState> for MistakesWithinBudget {
    fn holds(state: &PuzzleState) -> bool {
        if state.mistakes_remaining() > MISTAKE_BUDGET {
            warn!(
                remaining = state.mistakes_remaining(),
                "mistake budget exceeded"
            );
            return false;
        }

        let consistent = state.phase() != Phase::Lost || state.mistakes_remaining() == 0;
        if !consistent {
            warn!(
                remaining = state.mistakes_remaining(),
                "lost session with mistakes remaining"
            );
        }
        consistent
    }

    fn description() -> &'static str {
        "Mistakes stay within budget; a lost session has none remaining"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (SelectionOnBoard, FoundDisjoint, MistakesWithinBudget);

/// Asserts that all session invariants hold (panics on violation in debug
/// builds).
pub fn assert_invariants(state: &PuzzleState) {
    debug_assert!(
        SessionInvariants::check_all(state).is_ok(),
        "session invariant violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ColorTag};

    fn fresh_state() -> PuzzleState {
        PuzzleState::new(
            ["BLUSH", "ROSE", "MAUVE", "FUCHSIA"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_state() {
        let state = fresh_state();
        assert!(SessionInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_selection_off_board_is_detected() {
        let mut state = fresh_state();
        let board = state.board.clone();
        state.selection.toggle("BLUSH", &board).expect("on board");
        state.board.retain(|w| w != "BLUSH");

        let violations = SessionInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(SelectionOnBoard::description())]
        );
    }

    #[test]
    fn test_found_word_left_on_board_is_detected() {
        let mut state = fresh_state();
        state.found.push(Category::new(
            "SHADES OF PINK",
            ["BLUSH", "ROSE", "MAUVE", "FUCHSIA"],
            ColorTag::Yellow,
            1,
        ));

        let result = FoundDisjoint::holds(&state);
        assert!(!result);
    }

    #[test]
    fn test_lost_with_budget_left_is_detected() {
        let mut state = fresh_state();
        state.phase = Phase::Lost;
        state.mistakes_remaining = 2;

        assert!(!MistakesWithinBudget::holds(&state));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = fresh_state();

        type TwoInvariants = (SelectionOnBoard, MistakesWithinBudget);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
