//! Board snapshots and the branching history that holds them.

use crate::{Board, Move, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One historical board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Position played to reach this board; `None` for the game start.
    played: Option<Position>,
}

impl Snapshot {
    /// The empty board every history starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// Derives the snapshot that follows this one after `action`.
    pub fn advance(&self, action: Move) -> Self {
        Self {
            board: self.board.with_mark(action.position, action.player),
            played: Some(action.position),
        }
    }
}

/// Ordered, never-empty list of snapshots for the current branch.
///
/// Index 0 is always the initial snapshot. The list only grows at the end,
/// and shrinks only when a new branch is cut from an earlier snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `index`, then appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn branch_from(&mut self, index: usize, snapshot: Snapshot) -> usize {
        if index + 1 < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - index - 1,
                "Discarding future snapshots"
            );
            self.snapshots.truncate(index + 1);
        }
        self.snapshots.push(snapshot);
        self.last_index()
    }

    /// Resets to the single initial snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::initial());
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
