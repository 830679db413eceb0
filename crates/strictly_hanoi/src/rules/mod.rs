//! Game rules for the Tower of Hanoi.
//!
//! Pure functions over [`Towers`](crate::Towers). Rules are kept apart
//! from peg storage so contracts and the session layer can compose them.

pub mod legal;
pub mod solved;

pub use legal::{can_move, check_move, legal_moves};
pub use solved::is_solved;
