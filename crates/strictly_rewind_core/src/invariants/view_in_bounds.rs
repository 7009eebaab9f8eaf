//! View pointer invariant.

use super::Invariant;
use crate::GameSession;

/// Invariant: the view pointer indexes an existing snapshot.
pub struct ViewInBoundsInvariant;

impl Invariant<GameSession> for ViewInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.view_index() < session.history().len()
    }

    fn description() -> &'static str {
        "View pointer is a valid history index"
    }
}
