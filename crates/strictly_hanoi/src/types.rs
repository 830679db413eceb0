//! Core domain types for the Tower of Hanoi.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A disk, identified by its size.
///
/// Sizes run from 1 to `N` and are unique within one puzzle. A larger size
/// is a physically larger disk.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Disk(u32);

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u32) -> Self {
        Self(size)
    }

    /// Returns the size of this disk.
    pub fn size(self) -> u32 {
        self.0
    }
}

/// One of the three pegs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum PegId {
    /// The starting peg (index 0).
    Left,
    /// The spare peg (index 1).
    Middle,
    /// The target peg (index 2).
    Right,
}

impl PegId {
    /// The peg every disk must end up on.
    pub const TARGET: PegId = PegId::Right;

    /// All three pegs, in index order.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Converts the peg to its index (0-2).
    pub fn to_index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// Creates a peg from its index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Left),
            1 => Some(PegId::Middle),
            2 => Some(PegId::Right),
            _ => None,
        }
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            PegId::Left => "Left",
            PegId::Middle => "Middle",
            PegId::Right => "Target",
        }
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stack of disks, stored bottom (index 0) to top (last element).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Peg {
    disks: Vec<Disk>,
}

impl Peg {
    /// Creates an empty peg.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps disks given bottom to top. Order is not checked.
    pub(crate) fn from_disks(disks: Vec<Disk>) -> Self {
        Self { disks }
    }

    /// Creates a full starting stack: `n` at the bottom, `1` on top.
    pub(crate) fn stacked(n: u32) -> Self {
        Self {
            disks: (1..=n).rev().map(Disk::new).collect(),
        }
    }

    /// Returns the top disk, if any.
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Returns the disks bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Returns the disk sizes bottom to top.
    pub fn sizes(&self) -> Vec<u32> {
        self.disks.iter().map(|d| d.size()).collect()
    }

    /// Number of disks on the peg.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Returns true if the peg holds no disks.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Returns true if sizes strictly decrease from bottom to top.
    pub fn is_descending(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }
}
