//! Strictly Rewind - terminal tic-tac-toe with time travel.
//!
//! The game itself lives in [`strictly_rewind_core`]; this crate is the
//! presentation shell around it: configuration, the command line, a
//! non-interactive replay printer and the terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, RewindConfig};

// Crate-level exports - Game types
pub use strictly_rewind_core::{
    evaluate, Board, GameSession, GameView, History, Move, MoveEntry, MoveError, MoveOrder,
    NavigationError, Outcome, Player, Position, Snapshot, Square, Status,
};
