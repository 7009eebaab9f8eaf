//! Non-interactive replay: apply moves, optionally rewind, print the result.

use strictly_rewind_core::{GameSession, GameView, MoveOrder, Player, Position};
use tracing::{info, instrument, warn};

/// Plays `moves` into a fresh session, then jumps to `jump` if given.
///
/// Rejected moves and jumps are logged and skipped, the same way the
/// interactive shell ignores illegal clicks.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, order: MoveOrder) -> GameSession {
    let mut session = GameSession::with_order(order);
    for &cell in moves {
        if let Err(e) = session.play_move(cell) {
            warn!(cell, error = %e, "Skipping rejected move");
        }
    }
    if let Some(target) = jump
        && let Err(e) = session.jump_to(target)
    {
        warn!(target, error = %e, "Ignoring jump");
    }
    info!(
        history_len = session.history().len(),
        view = session.view_index(),
        "Replay finished"
    );
    session
}

/// Renders a view as plain text: board, status, then the move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = match view.cells[index] {
                    Some(Player::X) => "X",
                    Some(Player::O) => "O",
                    None => ".",
                };
                match Position::from_index(index) {
                    Some(pos) if view.is_winning(pos) => format!("[{}]", mark),
                    _ => format!(" {} ", mark),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&view.status);
    out.push_str("\n\n");
    out.push_str(&view.order_label);
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.number, entry.label));
    }
    out
}
