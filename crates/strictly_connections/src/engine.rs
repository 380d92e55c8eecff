//! Event-driven state machine orchestrating a puzzle session.
//!
//! The engine owns the session state and mutates it only through the public
//! command surface (`select_word`, `deselect_all`, `reshuffle`, `submit`,
//! `restart`). Every mutation queues [`GameEvent`]s for the rendering
//! collaborator; presentation-delayed follow-ups (clearing a wrong guess,
//! revealing the outcome) go through the epoch-tagged [`Scheduler`] and fire
//! from `tick`.

use crate::event::GameEvent;
use crate::invariants::assert_invariants;
use crate::matching::{self, MatchResult};
use crate::schedule::Scheduler;
use crate::selection::SelectionError;
use crate::shuffle;
use crate::state::{MISTAKE_BUDGET, Phase, PuzzleState};
use crate::types::{Category, Puzzle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Delay before the win modal appears, letting the last solved-category
/// feedback render first.
pub const WIN_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Delay before a wrong guess is deselected (the shake-feedback window).
pub const WRONG_GUESS_CLEAR_DELAY: Duration = Duration::from_millis(500);

/// Delay before the loss modal appears after the final mistake.
pub const LOSS_REVEAL_DELAY: Duration = Duration::from_millis(600);

/// Follow-up work sequenced behind presentation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    /// Clear the selection once wrong-guess feedback has displayed.
    ClearSelection,
    /// Move to the terminal phase and announce the outcome.
    RevealOutcome {
        /// Whether the player found all categories.
        won: bool,
    },
}

/// State machine for one word-grouping puzzle session.
///
/// Holds the [`Puzzle`] for the session's lifetime and rebuilds
/// [`PuzzleState`] from it on every restart. The engine's clock only moves
/// when the driving loop calls [`tick`](GameEngine::tick), which keeps
/// deferred transitions deterministic under test.
#[derive(Debug)]
pub struct GameEngine {
    puzzle: Puzzle,
    state: PuzzleState,
    scheduler: Scheduler<DeferredAction>,
    events: VecDeque<GameEvent>,
    clock: Duration,
    outcome_pending: bool,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with a freshly shuffled board and queues the initial
    /// render events.
    #[instrument(skip(puzzle))]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_rng(puzzle, StdRng::from_entropy())
    }

    /// Creates an engine with a caller-supplied RNG, for deterministic board
    /// layouts in tests.
    pub fn with_rng(puzzle: Puzzle, rng: StdRng) -> Self {
        let mut engine = Self {
            puzzle,
            state: PuzzleState::new(Vec::new()),
            scheduler: Scheduler::new(),
            events: VecDeque::new(),
            clock: Duration::ZERO,
            outcome_pending: false,
            rng,
        };
        engine.initialize();
        engine
    }

    /// Builds a fresh session: shuffled board, full mistake budget, empty
    /// selection and found set.
    fn initialize(&mut self) {
        let board = shuffle::shuffled(&mut self.rng, &self.puzzle.all_words());
        self.state = PuzzleState::new(board);
        self.outcome_pending = false;

        info!(words = self.state.board.len(), "session initialized");

        self.emit_board();
        self.events
            .push_back(GameEvent::MistakesChanged(MISTAKE_BUDGET));
        self.events.push_back(GameEvent::SubmitEnabledChanged(false));
    }

    /// The puzzle this session is played over.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Current phase, shorthand for `state().phase()`.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Drains all queued events in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Advances the engine clock and fires any due deferred actions.
    ///
    /// The clock is monotonic; a `now` earlier than the current clock is
    /// ignored.
    pub fn tick(&mut self, now: Duration) {
        if now > self.clock {
            self.clock = now;
        }

        for action in self.scheduler.poll_due(self.clock) {
            match action {
                DeferredAction::ClearSelection => {
                    if self.state.phase == Phase::Playing && !self.state.selection.is_empty() {
                        debug!("clearing wrong guess after feedback window");
                        self.state.selection.clear();
                        self.emit_selection();
                    }
                }
                DeferredAction::RevealOutcome { won } => self.reveal_outcome(won),
            }
        }
    }

    /// Toggles a word in the selection.
    ///
    /// No-op after the terminal phase. Queues board and submit-enabled events
    /// on success.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::WordNotOnBoard`] when the word is absent from
    /// the board; this indicates a renderer out of sync with the engine.
    #[instrument(skip(self))]
    pub fn select_word(&mut self, word: &str) -> Result<(), SelectionError> {
        if self.state.phase.is_terminal() {
            debug!(word, "ignoring selection after terminal phase");
            return Ok(());
        }

        let toggled = self.state.selection.toggle(word, &self.state.board)?;
        debug!(word, ?toggled, count = self.state.selection.len(), "toggled");

        self.emit_selection();
        assert_invariants(&self.state);
        Ok(())
    }

    /// Empties the selection. No-op after the terminal phase.
    #[instrument(skip(self))]
    pub fn deselect_all(&mut self) {
        if self.state.phase.is_terminal() {
            debug!("ignoring deselect after terminal phase");
            return;
        }

        self.state.selection.clear();
        self.emit_selection();
    }

    /// Re-shuffles the display order of the remaining words. Membership never
    /// changes. No-op after the terminal phase or while feedback is pending.
    #[instrument(skip(self))]
    pub fn reshuffle(&mut self) {
        if self.state.phase.is_terminal() {
            debug!("ignoring reshuffle after terminal phase");
            return;
        }
        if self.scheduler.has_pending() {
            debug!("ignoring reshuffle while feedback is pending");
            return;
        }

        shuffle::shuffle_in_place(&mut self.rng, &mut self.state.board);
        self.emit_board();
    }

    /// Submits the current selection as a guess.
    ///
    /// Silent no-op unless the session is in play, no outcome reveal is
    /// pending, and the selection holds exactly four words.
    #[instrument(skip(self))]
    pub fn submit(&mut self) {
        if self.state.phase.is_terminal() || self.outcome_pending {
            debug!("ignoring submit outside active play");
            return;
        }
        if !self.state.selection.is_full() {
            debug!(
                count = self.state.selection.len(),
                "ignoring submit with incomplete selection"
            );
            return;
        }

        let found_names: Vec<&str> = self
            .state
            .found
            .iter()
            .map(|c| c.name().as_str())
            .collect();

        match matching::evaluate(
            self.state.selection.words(),
            self.puzzle.categories(),
            &found_names,
        ) {
            Ok(MatchResult::Correct(category)) => self.apply_correct(category),
            Ok(MatchResult::Incorrect) => self.apply_incorrect(),
            // Unreachable behind the is_full guard; log rather than crash.
            Err(error) => warn!(%error, "guess evaluation rejected"),
        }

        assert_invariants(&self.state);
    }

    /// Discards the current session and starts a new one over the same
    /// puzzle. Deferred actions from the old session are invalidated.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting session");
        self.scheduler.invalidate();
        self.initialize();
    }

    fn apply_correct(&mut self, category: Category) {
        info!(category = %category.name(), "category solved");

        self.state.found.push(category.clone());
        self.state.board.retain(|word| !category.contains(word));
        self.state.selection.clear();

        self.events.push_back(GameEvent::CategorySolved(category));
        self.emit_selection();

        if self.state.found.len() == self.puzzle.categories().len() {
            self.outcome_pending = true;
            self.scheduler.schedule(
                self.clock + WIN_REVEAL_DELAY,
                DeferredAction::RevealOutcome { won: true },
            );
        }
    }

    fn apply_incorrect(&mut self) {
        self.state.mistakes_remaining = self.state.mistakes_remaining.saturating_sub(1);
        info!(
            remaining = self.state.mistakes_remaining,
            guess = ?self.state.selection.words(),
            "wrong guess"
        );

        self.events
            .push_back(GameEvent::MistakesChanged(self.state.mistakes_remaining));
        self.events
            .push_back(GameEvent::WrongGuess(self.state.selection.words().to_vec()));

        self.scheduler.schedule(
            self.clock + WRONG_GUESS_CLEAR_DELAY,
            DeferredAction::ClearSelection,
        );

        if self.state.mistakes_remaining == 0 {
            self.outcome_pending = true;
            self.scheduler.schedule(
                self.clock + LOSS_REVEAL_DELAY,
                DeferredAction::RevealOutcome { won: false },
            );
        }
    }

    fn reveal_outcome(&mut self, won: bool) {
        if self.state.phase.is_terminal() {
            return;
        }

        self.state.phase = if won { Phase::Won } else { Phase::Lost };
        self.outcome_pending = false;

        let remaining: Vec<Category> = self
            .puzzle
            .categories()
            .iter()
            .filter(|c| !self.state.found.iter().any(|f| f.name() == c.name()))
            .cloned()
            .collect();

        info!(won, unfound = remaining.len(), "session ended");
        self.events.push_back(GameEvent::GameEnded { won, remaining });
        assert_invariants(&self.state);
    }

    fn emit_board(&mut self) {
        self.events.push_back(GameEvent::BoardRendered {
            words: self.state.board.clone(),
            selected: self.state.selection.words().to_vec(),
        });
    }

    fn emit_selection(&mut self) {
        self.emit_board();
        self.events.push_back(GameEvent::SubmitEnabledChanged(
            self.state.selection.is_full(),
        ));
    }
}
