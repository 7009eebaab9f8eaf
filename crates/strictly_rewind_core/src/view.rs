//! Read-only projection of a session for presentation layers.

use crate::outcome::Outcome;
use crate::{GameSession, MoveOrder, Player, Position};
use serde::Serialize;

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Chooses the status for an outcome and the player on turn.
    pub fn new(outcome: Outcome, to_move: Player) -> Self {
        match outcome {
            Outcome::Win { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(to_move),
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index (0 is the game start).
    pub number: usize,
    /// Position played to reach this snapshot.
    pub played: Option<Position>,
    /// True for the viewed snapshot, which is not navigable.
    pub current: bool,
    /// Text shown for this entry.
    pub label: String,
}

impl MoveEntry {
    /// Builds the entry for snapshot `number`.
    pub fn new(number: usize, played: Option<Position>, current: bool) -> Self {
        let label = match (current, played) {
            (true, _) => format!("You are at move #{}", number),
            (false, Some(pos)) => {
                format!("Go to move #{} - ({}, {})", number, pos.row(), pos.col())
            }
            (false, None) => "Go to game start".to_string(),
        };
        Self {
            number,
            played,
            current,
            label,
        }
    }

    /// Row and column of the played cell.
    pub fn cell(&self) -> Option<(usize, usize)> {
        self.played.map(|pos| (pos.row(), pos.col()))
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Snapshot of everything the presentation shell renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Viewed board, row-major; `None` for empty squares.
    pub cells: [Option<Player>; 9],
    /// Outcome of the viewed board.
    pub outcome: Outcome,
    /// Status line text.
    pub status: String,
    /// Player on turn at the viewed snapshot.
    pub to_move: Player,
    /// Positions to highlight; empty unless someone won.
    pub winning_line: Vec<Position>,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Index of the viewed snapshot.
    pub view_index: usize,
    /// Current display order.
    pub order: MoveOrder,
    /// Label for the order toggle.
    pub order_label: String,
}

impl GameView {
    /// Projects a session into a view.
    pub fn project(session: &GameSession) -> Self {
        let outcome = session.outcome();
        let cells = session.current_board().squares().map(|sq| sq.player());
        Self {
            cells,
            outcome,
            status: Status::new(outcome, session.to_move()).to_string(),
            to_move: session.to_move(),
            winning_line: session.winning_line(),
            moves: session.moves(),
            view_index: session.view_index(),
            order: session.order(),
            order_label: format!("Sort list {}", session.order().label()),
        }
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(MoveEntry::new(0, None, false).label, "Go to game start");
        assert_eq!(
            MoveEntry::new(3, Some(Position::BottomCenter), false).label,
            "Go to move #3 - (2, 1)"
        );
        assert_eq!(
            MoveEntry::new(3, Some(Position::BottomCenter), true).label,
            "You are at move #3"
        );
    }

    #[test]
    fn test_cell_seven_is_row_two_col_one() {
        let entry = MoveEntry::new(1, Position::from_index(7), false);
        assert_eq!(entry.cell(), Some((2, 1)));
    }

    #[test]
    fn test_projection_marks_current_entry() {
        let mut session = GameSession::replay(&[0, 4, 8]).unwrap();
        session.jump_to(1).unwrap();
        let view = session.view();
        let current: Vec<_> = view.moves.iter().filter(|m| m.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].number, 1);
        assert_eq!(view.status, "Next player: O");
        assert_eq!(view.order_label, "Sort list Ascending");
    }

    #[test]
    fn test_projection_serializes() {
        let session = GameSession::replay(&[0, 4, 1, 5, 2]).unwrap();
        let json = serde_json::to_value(session.view()).unwrap();
        assert_eq!(json["status"], "Winner: X");
        assert_eq!(json["cells"][0], "X");
        assert!(json["cells"][8].is_null());
        assert_eq!(json["winning_line"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["order"], "ascending");
    }
}
