//! Win detection.

use crate::{PegId, Towers};
use tracing::instrument;

/// Returns true if `target` holds all `disk_count` disks.
///
/// Since the pegs always partition the disk set, this is equivalent to the
/// other two pegs being empty.
#[instrument(skip(towers))]
pub fn is_solved(towers: &Towers, target: PegId, disk_count: u32) -> bool {
    towers.peg(target).len() == disk_count as usize
}
