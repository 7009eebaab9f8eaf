//! Terminal UI for Strictly Rewind.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{action_for, move_cursor, Action};

use crate::config::RewindConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &RewindConfig) -> Result<()> {
    init_file_tracing(config)?;
    info!(order = ?config.sort_order(), "Starting Strictly Rewind TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(*config.sort_order());
    let res = run_loop(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.session().history().len() - 1, "TUI exited");
    res
}

/// Puts the terminal back to cooked mode on the main screen when dropped,
/// including when setup fails partway.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen, then shows the cursor.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

/// Draw, then block for the next key; one event at a time.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key.code)
        {
            app.handle(action);
        }
    }
    Ok(())
}

/// Sends logs to the configured file so they don't tear the screen.
fn init_file_tracing(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_terminal_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "got {:?}", written);
        assert!(written.contains("\x1b[?25h"), "got {:?}", written);
    }

    #[test]
    fn test_restore_terminal_is_repeatable() {
        restore_terminal(&mut Vec::new()).unwrap();
        restore_terminal(&mut Vec::new()).unwrap();
    }
}
