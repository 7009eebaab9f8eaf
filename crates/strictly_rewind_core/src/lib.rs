//! Strictly Rewind core - tic-tac-toe with a branching move history.
//!
//! # Architecture
//!
//! - **Outcome evaluator**: [`evaluate`] classifies a [`Board`] as won,
//!   drawn or in progress. Pure and never cached.
//! - **Game session**: [`GameSession`] owns the [`History`] of
//!   [`Snapshot`]s, the view pointer and the [`MoveOrder`] preference.
//! - **Projection**: [`GameView`] is the read-only state handed to a
//!   presentation layer.
//!
//! # Example
//!
//! ```
//! use strictly_rewind_core::{GameSession, Player, Status};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.play_move(cell).unwrap();
//! }
//! assert_eq!(session.status(), Status::Winner(Player::X));
//!
//! // Rewind and take a different branch.
//! session.jump_to(1).unwrap();
//! session.play_move(8).unwrap();
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
pub mod invariants;
mod order;
mod outcome;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod view;

pub use action::{Move, MoveError, NavigationError};
pub use order::MoveOrder;
pub use outcome::{evaluate, Outcome};
pub use position::Position;
pub use session::GameSession;
pub use snapshot::{History, Snapshot};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, Status};
