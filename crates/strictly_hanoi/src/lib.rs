//! Strictly Hanoi - pure Tower of Hanoi puzzle logic.
//!
//! Three pegs, `N` disks, one rule: a disk may only come to rest on an
//! empty peg or on a strictly larger disk. Everything in this crate is a
//! pure value or a pure function; clocks, scores and rendering live in the
//! session layer built on top of it.
//!
//! # Architecture
//!
//! - **Types**: [`Disk`], [`PegId`], [`Peg`]
//! - **State**: [`Towers`] owns the three pegs and keeps them partitioned
//! - **Rules**: [`rules::can_move`], [`rules::check_move`], [`rules::is_solved`]
//! - **Contracts**: [`MoveContract`] checks moves before and after they apply
//! - **Invariants**: [`invariants::DescendingPegs`], [`invariants::DiskConservation`]
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Move, PegId, Towers};
//!
//! let mut towers = Towers::new(1)?;
//! towers.apply(Move::new(PegId::Left, PegId::Right))?;
//! assert!(towers.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
pub mod invariants;
pub mod rules;
mod towers;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, MoveContract};
pub use error::PuzzleError;
pub use invariants::{HanoiInvariants, Invariant, InvariantSet, InvariantViolation};
pub use towers::Towers;
pub use types::{Disk, Peg, PegId};
