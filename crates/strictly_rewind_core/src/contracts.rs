//! Contract-based validation for session commands.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`.
//! Preconditions are always checked; postconditions run in debug builds.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::outcome::evaluate;
use crate::{GameSession, Move, MoveError};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the viewed board must still be undecided.
pub struct PositionUndecided;

impl PositionUndecided {
    /// Fails with [`MoveError::GameOver`] on a won or drawn board.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if evaluate(session.current_board()).is_decided() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] on a taken square.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if !session.current_board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the mover must match the parity of the viewed snapshot.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails if the move is not for the player on turn.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if mov.player != session.to_move() {
            Err(MoveError::InvariantViolation(format!(
                "{} moved out of turn",
                mov.player
            )))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, session)?;
        PositionUndecided::check(session)?;
        PlayersTurn::check(mov, session)?;
        Ok(())
    }
}

/// Contract for [`GameSession::play_move`].
///
/// Postconditions:
/// - history is exactly one snapshot longer than the truncation point
/// - the view sits on the new snapshot
/// - every session invariant still holds
pub struct PlayContract;

impl Contract<GameSession, Move> for PlayContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let expected_len = before.view_index() + 2;
        if after.history().len() != expected_len {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History length postcondition failed"
            );
            return Err(MoveError::InvariantViolation(format!(
                "History has {} entries, expected {}",
                after.history().len(),
                expected_len
            )));
        }
        if after.view_index() != after.history().last_index() {
            return Err(MoveError::InvariantViolation(
                "View is not on the newest snapshot".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
