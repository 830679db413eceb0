//! Move legality.
//!
//! One rule covers both "one disk at a time" and "never larger on
//! smaller": only top disks are addressable, and a top disk may land on an
//! empty peg or on a strictly larger disk.

use crate::{Move, MoveError, PegId, Towers};
use tracing::instrument;

/// Returns true if the top disk of `from` may be placed on `to`.
///
/// Never fails; an illegal or nonsensical move is simply `false`.
#[instrument(skip(towers))]
pub fn can_move(towers: &Towers, from: PegId, to: PegId) -> bool {
    check_move(towers, Move::new(from, to)).is_ok()
}

/// Checks a move and reports why it is illegal.
#[instrument(skip(towers))]
pub fn check_move(towers: &Towers, action: Move) -> Result<(), MoveError> {
    if action.from == action.to {
        return Err(MoveError::SamePeg(action.from));
    }

    let moving = towers
        .top_of(action.from)
        .ok_or(MoveError::EmptySource(action.from))?;

    match towers.top_of(action.to) {
        Some(resting) if resting < moving => Err(MoveError::LargerOnSmaller { moving, resting }),
        _ => Ok(()),
    }
}

/// Every legal move from the current position.
#[instrument(skip(towers))]
pub fn legal_moves(towers: &Towers) -> Vec<Move> {
    PegId::ALL
        .iter()
        .flat_map(|&from| PegId::ALL.iter().map(move |&to| Move::new(from, to)))
        .filter(|action| check_move(towers, *action).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Disk;

    #[test]
    fn test_same_peg_is_illegal() {
        let towers = Towers::new(3).unwrap();
        assert!(!can_move(&towers, PegId::Left, PegId::Left));
        assert_eq!(
            check_move(&towers, Move::new(PegId::Left, PegId::Left)),
            Err(MoveError::SamePeg(PegId::Left))
        );
    }

    #[test]
    fn test_empty_source_is_illegal() {
        let towers = Towers::new(3).unwrap();
        assert!(!can_move(&towers, PegId::Middle, PegId::Right));
        assert_eq!(
            check_move(&towers, Move::new(PegId::Middle, PegId::Right)),
            Err(MoveError::EmptySource(PegId::Middle))
        );
    }

    #[test]
    fn test_onto_empty_peg_is_legal() {
        let towers = Towers::new(3).unwrap();
        assert!(can_move(&towers, PegId::Left, PegId::Middle));
        assert!(can_move(&towers, PegId::Left, PegId::Right));
    }

    #[test]
    fn test_larger_on_smaller_is_illegal() {
        let towers = Towers::replay(3, &[Move::new(PegId::Left, PegId::Right)]).unwrap();
        assert_eq!(
            check_move(&towers, Move::new(PegId::Left, PegId::Right)),
            Err(MoveError::LargerOnSmaller {
                moving: Disk::new(2),
                resting: Disk::new(1),
            })
        );
        assert!(!can_move(&towers, PegId::Right, PegId::Left));
        assert!(can_move(&towers, PegId::Right, PegId::Middle));
    }

    #[test]
    fn test_legal_moves_from_start() {
        let towers = Towers::new(3).unwrap();
        let moves = legal_moves(&towers);
        assert_eq!(
            moves,
            vec![
                Move::new(PegId::Left, PegId::Middle),
                Move::new(PegId::Left, PegId::Right),
            ]
        );
    }
}
