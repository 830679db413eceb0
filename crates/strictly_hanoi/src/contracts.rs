//! Contract-based validation for Tower of Hanoi moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use super::invariants::{HanoiInvariants, InvariantSet};
use super::rules::check_move;
use super::{Move, MoveError, Towers};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for disk moves.
///
/// Preconditions:
/// - Source and destination differ
/// - Source peg is non-empty
/// - Destination is empty or topped by a larger disk
///
/// Postconditions:
/// - Every peg still strictly descends
/// - Every disk is present exactly once
/// - Exactly one disk changed peg
pub struct MoveContract;

impl Contract<Towers, Move> for MoveContract {
    #[instrument(skip(towers))]
    fn pre(towers: &Towers, action: &Move) -> Result<(), MoveError> {
        check_move(towers, *action)
    }

    #[instrument(skip_all)]
    fn post(before: &Towers, after: &Towers) -> Result<(), MoveError> {
        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let moved: usize = before
            .pegs()
            .iter()
            .zip(after.pegs())
            .map(|(b, a)| b.len().abs_diff(a.len()))
            .sum();
        if moved != 2 {
            warn!(moved, "Move changed more than one disk");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected one disk to change peg, peg sizes shifted by {}",
                moved
            )));
        }

        Ok(())
    }
}
