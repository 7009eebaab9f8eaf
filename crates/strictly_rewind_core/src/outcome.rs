//! Outcome evaluation for a single board.
//!
//! The outcome is never stored alongside a board: callers evaluate on
//! demand, so there is no cached state that could drift from the board.

use crate::rules::{is_full, winning_line};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Win {
        /// The player who owns the line.
        player: Player,
        /// The three winning positions, in scan order.
        line: [Position; 3],
    },
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once no further move may be played on this board.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board as won, drawn or still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = match winning_line(board) {
        Some((player, line)) => Outcome::Win { player, line },
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    };
    trace!(%outcome, "Evaluated board");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LINES;
    use crate::Square;

    fn board_of(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_reports_its_cells() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Square::Occupied(player));
                }
                assert_eq!(evaluate(&board), Outcome::Win { player, line });
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O O X / X X O
        let board = board_of("XOXOOXXXO");
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        // X X X / O O X / X O O
        let board = board_of("XXXOOXXOO");
        assert_eq!(evaluate(&board).winner(), Some(Player::X));
    }

    #[test]
    fn test_rows_before_diagonals() {
        // O O O / . O . / . . O  -> top row and main diagonal both complete
        let board = board_of("OOO.O...O");
        assert_eq!(evaluate(&board).line(), Some(LINES[0]));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let board = board_of("XO.XO....");
        let before = board;
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(board, before);
    }
}
