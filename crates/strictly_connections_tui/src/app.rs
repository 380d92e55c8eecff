//! Application state mediating between the engine and the terminal renderer.

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_connections::{
    Category, ConfettiEffect, GameEngine, GameEvent, MISTAKE_BUDGET, Puzzle,
};
use tracing::{debug, warn};

/// How long each confetti celebration runs.
const CONFETTI_DURATION: Duration = Duration::from_secs(3);

/// How long wrong-guess shake feedback lasts.
const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Columns in the word grid.
pub const GRID_COLUMNS: usize = 4;

/// Main application state.
///
/// Presentation state (cached board, banners, shake set, confetti, modal) is
/// rebuilt purely from drained [`GameEvent`]s; the engine is the single
/// source of truth for puzzle state.
pub struct App {
    engine: GameEngine,
    rng: StdRng,
    now: Duration,
    surface: (u16, u16),
    cursor: usize,
    words: Vec<String>,
    selected: Vec<String>,
    mistakes: u8,
    submit_enabled: bool,
    solved: Vec<Category>,
    shaking: Vec<String>,
    shake_until: Duration,
    confetti: Option<ConfettiEffect>,
    outcome: Option<(bool, Vec<Category>)>,
    status: String,
    quit: bool,
}

impl App {
    /// Creates the application over a puzzle and applies the engine's
    /// initial render events.
    pub fn new(puzzle: Puzzle) -> Self {
        let mut app = Self {
            engine: GameEngine::new(puzzle),
            rng: StdRng::from_entropy(),
            now: Duration::ZERO,
            surface: (80, 24),
            cursor: 0,
            words: Vec::new(),
            selected: Vec::new(),
            mistakes: MISTAKE_BUDGET,
            submit_enabled: false,
            solved: Vec::new(),
            shaking: Vec::new(),
            shake_until: Duration::ZERO,
            confetti: None,
            outcome: None,
            status: "Create four groups of four!".to_string(),
            quit: false,
        };
        app.process_events();
        app
    }

    /// Advances the clock, fires deferred engine work, and updates the
    /// running feedback effects.
    pub fn on_tick(&mut self, now: Duration, width: u16, height: u16) {
        self.now = now;
        self.surface = (width, height);

        self.engine.tick(now);
        self.process_events();

        if self.now >= self.shake_until {
            self.shaking.clear();
        }

        if let Some(effect) = &mut self.confetti {
            if !effect.tick(&mut self.rng, now) {
                self.confetti = None;
            }
        }
    }

    /// Handles a key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
                return true;
            }
            KeyCode::Char('r') => self.restart(),
            _ if self.outcome.is_some() => {
                // Modal is up; only restart and quit remain active.
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-(GRID_COLUMNS as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(GRID_COLUMNS as isize),
            KeyCode::Char(' ') => self.toggle_cursor_word(),
            KeyCode::Enter => self.engine.submit(),
            KeyCode::Char('d') => self.engine.deselect_all(),
            KeyCode::Char('s') => self.engine.reshuffle(),
            _ => {}
        }

        self.process_events();
        self.quit
    }

    /// Resizes the confetti surface along with the terminal.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.surface = (width, height);
        if let Some(effect) = &mut self.confetti {
            effect.resize(width as f32, height as f32);
        }
    }

    fn restart(&mut self) {
        self.engine.restart();
        self.solved.clear();
        self.shaking.clear();
        self.confetti = None;
        self.outcome = None;
        self.cursor = 0;
        self.status = "Create four groups of four!".to_string();
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.words.is_empty() {
            return;
        }

        let target = self.cursor as isize + delta;
        if target >= 0 && (target as usize) < self.words.len() {
            self.cursor = target as usize;
        }
    }

    fn toggle_cursor_word(&mut self) {
        let Some(word) = self.words.get(self.cursor).cloned() else {
            return;
        };

        if let Err(error) = self.engine.select_word(&word) {
            // Renderer out of sync with the engine; log it and re-render.
            warn!(%error, "selection rejected");
            self.status = error.to_string();
        }
    }

    fn process_events(&mut self) {
        for event in self.engine.drain_events() {
            debug!(?event, "applying engine event");
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::BoardRendered { words, selected } => {
                self.words = words;
                self.selected = selected;
                if self.cursor >= self.words.len() {
                    self.cursor = self.words.len().saturating_sub(1);
                }
            }
            GameEvent::SubmitEnabledChanged(enabled) => {
                self.submit_enabled = enabled;
            }
            GameEvent::MistakesChanged(remaining) => {
                self.mistakes = remaining;
            }
            GameEvent::CategorySolved(category) => {
                self.status = format!("Solved {}!", category.name());
                self.solved.push(category);
                self.start_confetti();
            }
            GameEvent::WrongGuess(words) => {
                self.shaking = words;
                self.shake_until = self.now + SHAKE_DURATION;
                self.status = "Not quite. Try again!".to_string();
            }
            GameEvent::GameEnded { won, remaining } => {
                if won {
                    self.status = "You found all the connections!".to_string();
                    self.start_confetti();
                } else {
                    self.status = "Better luck next time!".to_string();
                }
                self.outcome = Some((won, remaining));
            }
        }
    }

    fn start_confetti(&mut self) {
        let (width, height) = self.surface;
        self.confetti = Some(ConfettiEffect::play(
            &mut self.rng,
            self.now,
            CONFETTI_DURATION,
            width as f32,
            height as f32,
        ));
    }

    /// Words on the board, in display order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether the word at `index` is part of the current selection.
    pub fn is_selected(&self, index: usize) -> bool {
        self.words
            .get(index)
            .is_some_and(|word| self.selected.iter().any(|w| w == word))
    }

    /// Whether the word at `index` is in the wrong-guess shake window.
    pub fn is_shaking(&self, index: usize) -> bool {
        self.words
            .get(index)
            .is_some_and(|word| self.shaking.iter().any(|w| w == word))
    }

    /// Cursor position in the word grid.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Wrong guesses left.
    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    /// Whether a full four-word guess is ready to submit.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Solved categories in discovery order.
    pub fn solved(&self) -> &[Category] {
        &self.solved
    }

    /// The running confetti effect, if any.
    pub fn confetti(&self) -> Option<&ConfettiEffect> {
        self.confetti.as_ref()
    }

    /// Terminal outcome: `(won, unfound categories)`, once revealed.
    pub fn outcome(&self) -> Option<&(bool, Vec<Category>)> {
        self.outcome.as_ref()
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
