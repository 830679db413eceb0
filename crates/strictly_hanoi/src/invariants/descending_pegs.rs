//! Every peg is a strictly descending stack.

use super::Invariant;
use crate::Towers;

/// Invariant: no disk ever has a smaller disk beneath it.
pub struct DescendingPegs;

impl Invariant<Towers> for DescendingPegs {
    fn holds(towers: &Towers) -> bool {
        towers.pegs().iter().all(|peg| peg.is_descending())
    }

    fn description() -> &'static str {
        "Every peg strictly descends from bottom to top"
    }
}
