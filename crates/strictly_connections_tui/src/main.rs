//! Terminal UI for Strictly Connections

#![warn(missing_docs)]

mod app;
mod catalog;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;

/// Strictly Connections - word-grouping puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_connections_tui")]
#[command(about = "Word-grouping puzzle in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a puzzle JSON file (uses the built-in puzzle if omitted)
    #[arg(short, long)]
    puzzle: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output doesn't fight the TUI
    let log_file = std::fs::File::create("strictly_connections_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Connections TUI");

    let puzzle = match &cli.puzzle {
        Some(path) => catalog::load_puzzle(path)?,
        None => catalog::builtin_puzzle(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(puzzle);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "TUI loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let started = Instant::now();

    loop {
        let size = terminal.size()?;
        app.on_tick(started.elapsed(), size.width, size.height);

        terminal.draw(|f| ui::draw(f, &app))?;

        // ~30 fps redraw cadence keeps the confetti moving between inputs.
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key.code) {
                        info!("User quit");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
