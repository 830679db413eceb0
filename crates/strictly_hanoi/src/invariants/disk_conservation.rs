//! Disks are never created, destroyed or duplicated.

use super::Invariant;
use crate::Towers;

/// Invariant: the pegs together hold each of `1..=N` exactly once.
pub struct DiskConservation;

impl Invariant<Towers> for DiskConservation {
    fn holds(towers: &Towers) -> bool {
        let mut sizes: Vec<u32> = towers.disks().map(|disk| disk.size()).collect();
        sizes.sort_unstable();
        sizes.iter().copied().eq(1..=towers.disk_count())
    }

    fn description() -> &'static str {
        "Pegs hold each disk from 1 to N exactly once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disk, Move, PegId};

    #[test]
    fn test_start_holds() {
        for n in 1..=8 {
            assert!(DiskConservation::holds(&Towers::new(n).unwrap()));
        }
    }

    #[test]
    fn test_after_moves_holds() {
        let moves = [
            Move::new(PegId::Left, PegId::Right),
            Move::new(PegId::Left, PegId::Middle),
        ];
        let towers = Towers::replay(3, &moves).unwrap();
        assert!(DiskConservation::holds(&towers));
    }

    #[test]
    fn test_duplicate_disk_violates() {
        let mut towers = Towers::new(3).unwrap();
        towers.peg_mut(PegId::Middle).push(Disk::new(3));
        assert!(!DiskConservation::holds(&towers));
    }

    #[test]
    fn test_missing_disk_violates() {
        let mut towers = Towers::new(3).unwrap();
        towers.peg_mut(PegId::Left).pop();
        assert!(!DiskConservation::holds(&towers));
    }
}
