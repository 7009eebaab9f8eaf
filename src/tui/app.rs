//! Application state and logic.

use super::input::{move_cursor, Action};
use strictly_rewind_core::{GameSession, GameView, MoveOrder, Position};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// Owns the session exclusively; every key press is applied in full before
/// the next frame is drawn.
pub struct App {
    session: GameSession,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(order: MoveOrder) -> Self {
        Self {
            session: GameSession::with_order(order),
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Projection to render.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last rejected command, shown under the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    ///
    /// Rejected moves and jumps leave the session as it was; the reason is
    /// logged and kept as a notice.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        self.notice = None;
        let result = match action {
            Action::Cursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                Ok(())
            }
            Action::PlayCursor => self
                .session
                .play_move(self.cursor.to_index())
                .map_err(|e| e.to_string()),
            Action::PlayCell(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.session.play_move(cell).map_err(|e| e.to_string())
            }
            Action::StepBack => self.session.step_back().map_err(|e| e.to_string()),
            Action::StepForward => self.session.step_forward().map_err(|e| e.to_string()),
            Action::JumpStart => self.session.jump_to(0).map_err(|e| e.to_string()),
            Action::JumpLatest => {
                let last = self.session.history().last_index();
                self.session.jump_to(last).map_err(|e| e.to_string())
            }
            Action::ToggleOrder => {
                self.session.toggle_order();
                Ok(())
            }
            Action::Restart => {
                self.session.restart();
                Ok(())
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
                Ok(())
            }
        };

        if let Err(reason) = result {
            warn!(?action, %reason, "Command rejected");
            self.notice = Some(reason);
        }
    }
}
