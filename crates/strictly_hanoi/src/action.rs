//! First-class move type for the Tower of Hanoi.
//!
//! A move names two pegs and nothing else: only top disks are ever
//! addressable, so "which disk" is implied by the source peg.

use super::{Disk, PegId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Take the top disk of `from` and place it on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The peg the disk is lifted from.
    pub from: PegId,
    /// The peg the disk is placed on.
    pub to: PegId,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }

    /// Returns the source peg.
    pub fn from(&self) -> PegId {
        self.from
    }

    /// Returns the destination peg.
    pub fn to(&self) -> PegId {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from.label(), self.to.label())
    }
}

/// Reason a move cannot be made.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Source and destination are the same peg.
    #[display("Cannot move peg {} onto itself", _0)]
    SamePeg(PegId),

    /// The source peg has no disk to lift.
    #[display("Peg {} is empty", _0)]
    EmptySource(PegId),

    /// The disk would come to rest on a smaller disk.
    #[display("Disk {} cannot rest on smaller disk {}", moving, resting)]
    LargerOnSmaller {
        /// The disk being moved.
        moving: Disk,
        /// The disk currently on top of the destination.
        resting: Disk,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
