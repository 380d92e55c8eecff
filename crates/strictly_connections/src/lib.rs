//! Strictly Connections - word-grouping puzzle engine
//!
//! A single-session sixteen-word grouping puzzle: four hidden categories of
//! four words each, guessed four words at a time under a four-mistake budget.
//! This crate is the pure logic layer; rendering is a collaborator that sends
//! commands in and consumes [`GameEvent`]s out.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the session state machine (selection,
//!   matching, mistake accounting, win/loss) and queues events for a renderer
//! - **Scheduler**: epoch-tagged deferred actions sequence feedback before
//!   terminal transitions, and go inert on restart
//! - **Confetti**: a time-bounded particle arena triggered by solve events,
//!   independent of puzzle state
//!
//! # Example
//!
//! ```
//! use strictly_connections::{Category, ColorTag, GameEngine, Phase, Puzzle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let puzzle = Puzzle::new(vec![
//!     Category::new("SHADES OF PINK", ["BLUSH", "ROSE", "MAUVE", "FUCHSIA"], ColorTag::Yellow, 1),
//!     Category::new("BIRTHDAY THINGS", ["CAKE", "CANDLES", "BALLOONS", "GIFTS"], ColorTag::Green, 2),
//!     Category::new("WORDS THAT PRECEDE \"PINK\"", ["HOT", "THINK", "TICKLED", "INK"], ColorTag::Blue, 3),
//!     Category::new("TERMS OF ENDEARMENT", ["BABE", "LOVE", "DEAR", "ANGEL"], ColorTag::Purple, 4),
//! ])?;
//!
//! let mut engine = GameEngine::new(puzzle);
//! for word in ["BLUSH", "ROSE", "MAUVE", "FUCHSIA"] {
//!     engine.select_word(word)?;
//! }
//! engine.submit();
//!
//! assert_eq!(engine.state().found().len(), 1);
//! assert_eq!(engine.phase(), Phase::Playing);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod confetti;
mod engine;
mod event;
mod invariants;
mod matching;
mod schedule;
mod selection;
mod shuffle;
mod state;
mod types;

// Crate-level exports - Domain types
pub use types::{CATEGORY_COUNT, Category, ColorTag, Puzzle, PuzzleError, WORDS_PER_CATEGORY};

// Crate-level exports - Shuffling
pub use shuffle::{shuffle_in_place, shuffled};

// Crate-level exports - Selection
pub use selection::{SELECTION_LIMIT, SelectionError, SelectionState, Toggle};

// Crate-level exports - Matching
pub use matching::{MatchError, MatchResult, evaluate};

// Crate-level exports - Session state
pub use state::{MISTAKE_BUDGET, Phase, PuzzleState};

// Crate-level exports - Events
pub use event::GameEvent;

// Crate-level exports - Deferred actions
pub use schedule::{Scheduler, SessionEpoch};

// Crate-level exports - Invariants
pub use invariants::{
    FoundDisjoint, Invariant, InvariantSet, InvariantViolation, MistakesWithinBudget,
    SelectionOnBoard, SessionInvariants, assert_invariants,
};

// Crate-level exports - Engine
pub use engine::{
    GameEngine, LOSS_REVEAL_DELAY, WIN_REVEAL_DELAY, WRONG_GUESS_CLEAR_DELAY,
};

// Crate-level exports - Feedback effect
pub use confetti::{ConfettiEffect, PALETTE, PARTICLE_COUNT, Particle};
