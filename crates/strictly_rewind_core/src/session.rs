//! Game session: branching history, view pointer and display order.
//!
//! The session is the only owner of game state. Callers mutate it through
//! [`GameSession::play_move`], [`GameSession::jump_to`] and
//! [`GameSession::toggle_order`]; everything else is a derived query.

use crate::contracts::{Contract, PlayContract};
use crate::outcome::{evaluate, Outcome};
use crate::view::{GameView, MoveEntry, Status};
use crate::{Board, History, Move, MoveError, MoveOrder, NavigationError, Player, Position};
use tracing::{debug, info, instrument};

/// A single game of tic-tac-toe with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    view: usize,
    order: MoveOrder,
}

impl GameSession {
    /// Creates a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a session with the given move-list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            view: 0,
            order,
        }
    }

    /// Builds a session by playing `cells` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for &cell in cells {
            session.play_move(cell)?;
        }
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays the player on turn at `cell_index` on the viewed board.
    ///
    /// Any snapshots after the view are discarded before the new one is
    /// appended, and the view moves to the new snapshot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `cell_index > 8`
    /// - [`MoveError::SquareOccupied`] if the viewed square is taken
    /// - [`MoveError::GameOver`] if the viewed board is won or drawn
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(view = self.view, len = self.history.len()))]
    pub fn play_move(&mut self, cell_index: usize) -> Result<(), MoveError> {
        let position =
            Position::from_index(cell_index).ok_or(MoveError::OutOfRange(cell_index))?;
        let action = Move::new(self.to_move(), position);

        PlayContract::pre(self, &action)?;

        let before = self.clone();
        let next = self.current_snapshot().advance(action);
        self.view = self.history.branch_from(self.view, next);

        if cfg!(debug_assertions)
            && let Err(e) = PlayContract::post(&before, self)
        {
            *self = before;
            return Err(e);
        }

        info!(%action, move_number = self.view, "Move played");
        Ok(())
    }

    /// Moves the view pointer to `move_index`. History is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfRange`] if no such snapshot exists.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), NavigationError> {
        if move_index >= self.history.len() {
            return Err(NavigationError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        debug!(from = self.view, to = move_index, "Jumping through history");
        self.view = move_index;
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Display order toggled");
    }

    /// Steps the view one snapshot back.
    pub fn step_back(&mut self) -> Result<(), NavigationError> {
        match self.view.checked_sub(1) {
            Some(prev) => self.jump_to(prev),
            None => Err(NavigationError::OutOfRange {
                requested: 0,
                len: self.history.len(),
            }),
        }
    }

    /// Steps the view one snapshot forward.
    pub fn step_forward(&mut self) -> Result<(), NavigationError> {
        self.jump_to(self.view + 1)
    }

    /// Discards all history and returns to the empty board.
    ///
    /// The display order is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len() - 1, "Restarting game");
        self.history.clear();
        self.view = 0;
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived queries
    // ─────────────────────────────────────────────────────────────

    /// Full history of the current branch.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn view_index(&self) -> usize {
        self.view
    }

    /// Current move-list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The viewed snapshot.
    pub fn current_snapshot(&self) -> &crate::Snapshot {
        // The view invariant keeps this index in bounds.
        &self.history.snapshots()[self.view]
    }

    /// Board of the viewed snapshot.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Player to move at the viewed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.view)
    }

    /// Outcome of the viewed board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> Status {
        Status::new(self.outcome(), self.to_move())
    }

    /// Winning positions on the viewed board; empty unless someone won.
    pub fn winning_line(&self) -> Vec<Position> {
        self.outcome().line().map(Vec::from).unwrap_or_default()
    }

    /// One entry per snapshot, in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(n, snap)| MoveEntry::new(n, *snap.played(), n == self.view));
        match self.order {
            MoveOrder::Ascending => entries.collect(),
            MoveOrder::Descending => entries.rev().collect(),
        }
    }

    /// Read-only projection of everything a presentation layer needs.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::project(self)
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
