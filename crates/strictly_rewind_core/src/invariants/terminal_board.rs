//! Terminal board invariant: nothing follows a decided board.

use super::Invariant;
use crate::outcome::evaluate;
use crate::GameSession;

/// Invariant: only the newest snapshot of a branch may be won or drawn.
pub struct TerminalBoardInvariant;

impl Invariant<GameSession> for TerminalBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let snapshots = session.history().snapshots();
        snapshots[..snapshots.len().saturating_sub(1)]
            .iter()
            .all(|snap| !evaluate(snap.board()).is_decided())
    }

    fn description() -> &'static str {
        "No snapshot follows a won or drawn board"
    }
}
