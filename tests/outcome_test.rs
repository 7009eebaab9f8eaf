//! Tests for board outcome evaluation.

use strictly_rewind::{Board, Outcome, Player, Position, Square, evaluate};

fn board(marks: &[(usize, Player)]) -> Board {
    let mut squares = [Square::Empty; 9];
    for &(index, player) in marks {
        squares[index] = Square::Occupied(player);
    }
    Board::from_squares(squares)
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_column_win() {
    let b = board(&[(1, Player::O), (4, Player::O), (7, Player::O), (0, Player::X)]);
    assert_eq!(
        evaluate(&b),
        Outcome::Win {
            player: Player::O,
            line: [Position::TopCenter, Position::Center, Position::BottomCenter],
        }
    );
}

#[test]
fn test_columns_scanned_before_diagonals() {
    // Left column and main diagonal both complete for X.
    let b = board(&[
        (0, Player::X),
        (3, Player::X),
        (6, Player::X),
        (4, Player::X),
        (8, Player::X),
    ]);
    assert_eq!(
        evaluate(&b).line(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
}

#[test]
fn test_partial_board_in_progress() {
    let b = board(&[(0, Player::X), (4, Player::O), (8, Player::X)]);
    let outcome = evaluate(&b);
    assert_eq!(outcome, Outcome::InProgress);
    assert!(!outcome.is_decided());
    assert_eq!(outcome.winner(), None);
}

#[test]
fn test_draw() {
    // X O X / X O O / O X X
    let b = board(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::O),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::X),
    ]);
    assert!(evaluate(&b).is_draw());
}
