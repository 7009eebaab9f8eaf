//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameSession, Player, Square};

/// Invariant: every snapshot differs from its predecessor in exactly one
/// square, which went from Empty to the mover's mark at the recorded
/// position.
///
/// The mover is fixed by parity, so this also pins alternating turns and
/// rules out a played square ever reverting to Empty.
pub struct SingleStepInvariant;

impl Invariant<GameSession> for SingleStepInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(n, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(pos) = *after.played() else {
                    return false;
                };
                let mover = Player::for_move(n);
                let changed = before
                    .board()
                    .squares()
                    .iter()
                    .zip(after.board().squares())
                    .filter(|(a, b)| a != b)
                    .count();

                changed == 1
                    && before.board().get(pos) == Square::Empty
                    && after.board().get(pos) == Square::Occupied(mover)
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_played_game_holds() {
        let session = GameSession::replay(&[0, 4, 1, 5, 2]).unwrap();
        assert!(SingleStepInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut session = GameSession::new();
        let snaps = session.history_mut().snapshots_mut();
        let bad = snaps[0].advance(Move::new(Player::O, Position::Center));
        snaps.push(bad);
        assert!(!SingleStepInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = GameSession::replay(&[4]).unwrap();
        let snaps = session.history_mut().snapshots_mut();
        let bad = snaps[1].advance(Move::new(Player::O, Position::Center));
        snaps.push(bad);
        assert!(!SingleStepInvariant::holds(&session));
    }
}
