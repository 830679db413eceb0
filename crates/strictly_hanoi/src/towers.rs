//! Puzzle state: three pegs partitioning the disks `1..=N`.

use super::contracts::{Contract, MoveContract};
use super::invariants::{HanoiInvariants, InvariantSet};
use super::{Disk, Move, MoveError, Peg, PegId, PuzzleError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The three pegs and the disks stacked on them.
///
/// Starts with all `N` disks on [`PegId::Left`] (largest at the bottom) and
/// is solved when all of them sit on [`PegId::TARGET`].
///
/// Deserialization rejects positions that break the puzzle invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTowers")]
pub struct Towers {
    pegs: [Peg; 3],
    disk_count: u32,
}

/// Wire shape of [`Towers`] before validation.
#[derive(Deserialize)]
struct RawTowers {
    pegs: [Vec<Disk>; 3],
    disk_count: u32,
}

impl TryFrom<RawTowers> for Towers {
    type Error = PuzzleError;

    fn try_from(raw: RawTowers) -> Result<Self, Self::Error> {
        if raw.disk_count == 0 {
            return Err(PuzzleError::InvalidConfiguration { disk_count: 0 });
        }

        let towers = Self {
            pegs: raw.pegs.map(Peg::from_disks),
            disk_count: raw.disk_count,
        };
        HanoiInvariants::check_all(&towers).map_err(|violations| {
            let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            PuzzleError::InvalidPosition(reasons.join("; "))
        })?;
        Ok(towers)
    }
}

impl Towers {
    /// Creates the starting position for `disk_count` disks.
    ///
    /// Fails with [`PuzzleError::InvalidConfiguration`] when `disk_count` is 0.
    #[instrument]
    pub fn new(disk_count: u32) -> Result<Self, PuzzleError> {
        if disk_count == 0 {
            warn!("Rejected puzzle without disks");
            return Err(PuzzleError::InvalidConfiguration { disk_count });
        }

        Ok(Self {
            pegs: [Peg::stacked(disk_count), Peg::new(), Peg::new()],
            disk_count,
        })
    }

    /// Total number of disks in the puzzle.
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Returns the peg with the given id.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.to_index()]
    }

    /// Returns all three pegs in index order.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Returns the top disk of a peg, or `None` if it is empty.
    pub fn top_of(&self, id: PegId) -> Option<Disk> {
        self.peg(id).top()
    }

    /// Iterates over every disk on every peg.
    pub fn disks(&self) -> impl Iterator<Item = Disk> + '_ {
        self.pegs.iter().flat_map(|peg| peg.disks().iter().copied())
    }

    /// Moves the top disk of `from` onto `to` without checking sizes.
    ///
    /// Callers are expected to have validated the move with
    /// [`rules::can_move`](crate::rules::can_move). Only a same-peg move or
    /// an empty source are refused.
    #[instrument(skip(self))]
    pub fn move_top_disk(&mut self, from: PegId, to: PegId) -> Result<Disk, PuzzleError> {
        Ok(self.transfer(from, to)?)
    }

    /// Applies a move after checking the move contract.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Move) -> Result<Disk, MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let disk = self.transfer(action.from, action.to)?;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(disk)
    }

    /// Returns true if every disk sits on the target peg.
    pub fn is_solved(&self) -> bool {
        self.is_solved_on(PegId::TARGET, self.disk_count)
    }

    /// Returns true if `target` holds exactly `disk_count` disks.
    pub fn is_solved_on(&self, target: PegId, disk_count: u32) -> bool {
        super::rules::is_solved(self, target, disk_count)
    }

    /// Builds a fresh puzzle and applies `moves` in order.
    #[instrument]
    pub fn replay(disk_count: u32, moves: &[Move]) -> Result<Self, PuzzleError> {
        let mut towers = Self::new(disk_count)?;
        for action in moves {
            towers.apply(*action)?;
        }
        Ok(towers)
    }

    fn transfer(&mut self, from: PegId, to: PegId) -> Result<Disk, MoveError> {
        if from == to {
            return Err(MoveError::SamePeg(from));
        }

        let disk = self.pegs[from.to_index()]
            .pop()
            .ok_or(MoveError::EmptySource(from))?;
        self.pegs[to.to_index()].push(disk);

        debug!(%disk, %from, %to, "Disk moved");
        Ok(disk)
    }

    #[cfg(test)]
    pub(crate) fn peg_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.to_index()]
    }
}
