//! Tests for the Tower of Hanoi puzzle state.

use std::collections::{HashSet, VecDeque};

use strictly_hanoi::rules::{can_move, is_solved, legal_moves};
use strictly_hanoi::{
    HanoiInvariants, InvariantSet, Move, MoveError, PegId, PuzzleError, Towers,
};

/// Classic optimal solution for three disks.
fn three_disk_solution() -> Vec<Move> {
    use PegId::*;
    vec![
        Move::new(Left, Right),
        Move::new(Left, Middle),
        Move::new(Right, Middle),
        Move::new(Left, Right),
        Move::new(Middle, Left),
        Move::new(Middle, Right),
        Move::new(Left, Right),
    ]
}

#[test]
fn test_initial_position_for_many_sizes() {
    for n in 1..=12 {
        let towers = Towers::new(n).expect("positive disk count");
        let expected: Vec<u32> = (1..=n).rev().collect();
        assert_eq!(towers.peg(PegId::Left).sizes(), expected);
        assert!(towers.peg(PegId::Middle).is_empty());
        assert!(towers.peg(PegId::Right).is_empty());
        assert_eq!(towers.disk_count(), n);
    }
}

#[test]
fn test_zero_disks_is_invalid_configuration() {
    let err = Towers::new(0).unwrap_err();
    assert_eq!(err, PuzzleError::InvalidConfiguration { disk_count: 0 });
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn test_three_disk_solution_solves_only_at_the_end() {
    let mut towers = Towers::new(3).unwrap();
    let moves = three_disk_solution();

    for (i, action) in moves.iter().enumerate() {
        assert!(!towers.is_solved(), "solved too early before move {}", i);
        towers.apply(*action).expect("optimal solution is legal");
    }

    assert!(towers.is_solved());
    assert!(is_solved(&towers, PegId::TARGET, 3));
    assert_eq!(towers.peg(PegId::Right).sizes(), vec![3, 2, 1]);
}

#[test]
fn test_illegal_move_leaves_state_unchanged() {
    let mut towers = Towers::replay(3, &[Move::new(PegId::Left, PegId::Right)]).unwrap();
    let before = towers.clone();

    let err = towers.apply(Move::new(PegId::Left, PegId::Right)).unwrap_err();
    assert!(matches!(err, MoveError::LargerOnSmaller { .. }));
    assert_eq!(towers, before);
}

/// Walks every reachable position for small puzzles and checks that every
/// move `can_move` allows keeps all invariants, and every move it refuses
/// would have broken one or was impossible.
#[test]
fn test_every_reachable_position_keeps_invariants() {
    for n in 1..=4 {
        let start = Towers::new(n).unwrap();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([start.clone()]);
        seen.insert(start);

        while let Some(towers) = queue.pop_front() {
            assert!(HanoiInvariants::check_all(&towers).is_ok());

            for from in PegId::ALL {
                for to in PegId::ALL {
                    let mut next = towers.clone();
                    if can_move(&towers, from, to) {
                        next.apply(Move::new(from, to)).expect("allowed move applies");
                        assert!(HanoiInvariants::check_all(&next).is_ok());
                        if seen.insert(next.clone()) {
                            queue.push_back(next);
                        }
                    } else if from != to && !towers.peg(from).is_empty() {
                        next.move_top_disk(from, to).expect("unchecked transfer");
                        assert!(HanoiInvariants::check_all(&next).is_err());
                    }
                }
            }
        }

        // Every arrangement of n disks on three pegs is reachable.
        assert_eq!(seen.len(), 3usize.pow(n));
    }
}

#[test]
fn test_legal_moves_match_can_move() {
    let towers = Towers::replay(3, &three_disk_solution()[..3]).unwrap();
    let moves = legal_moves(&towers);
    for from in PegId::ALL {
        for to in PegId::ALL {
            assert_eq!(
                moves.contains(&Move::new(from, to)),
                can_move(&towers, from, to)
            );
        }
    }
}

#[test]
fn test_towers_serialize_as_size_lists() {
    let towers = Towers::replay(2, &[Move::new(PegId::Left, PegId::Middle)]).unwrap();
    let json = serde_json::to_value(&towers).unwrap();
    assert_eq!(json["pegs"], serde_json::json!([[2], [1], []]));
    assert_eq!(json["disk_count"], 2);
}

#[test]
fn test_move_display() {
    let action = Move::new(PegId::Left, PegId::Right);
    assert_eq!(action.to_string(), "Left -> Target");
}
