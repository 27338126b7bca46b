//! A connected group of same-colored stones, and its arena handle.

use crate::geometry::{Color, PositionSet};

/// Handle into `Board`'s group arena. Small integer id rather than a
/// reference-counted pointer, so boards stay flat, `Copy`-friendly data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u8);

/// A maximal connected chain of same-colored stones and its liberties.
///
/// Invariants (see `spec.md` I1-I5, maintained by `Board::place_stone`):
/// - I1: `stones` is never empty for a live group.
/// - I2: every stone in `stones` has the same `color`.
/// - I4: `liberties` is exactly the set of empty cells orthogonally
///   adjacent to some stone in `stones`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: PositionSet,
    pub liberties: PositionSet,
}

impl Group {
    pub fn new(color: Color, stones: PositionSet, liberties: PositionSet) -> Group {
        debug_assert!(!stones.is_empty(), "a group must contain at least one stone");
        Group { color, stones, liberties }
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn in_atari(&self) -> bool {
        self.num_liberties() == 1
    }
}
