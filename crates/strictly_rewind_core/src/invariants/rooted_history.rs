//! Rooted history invariant: history starts from the empty board.

use super::Invariant;
use crate::{GameSession, Snapshot};

/// Invariant: history is non-empty and index 0 is the initial snapshot.
pub struct RootedHistoryInvariant;

impl Invariant<GameSession> for RootedHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().get(0) == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no recorded move"
    }
}
