//! The live 9x9 board: grid-to-group mapping, group arena, and ko history.
//!
//! Group bookkeeping recomputes affected groups' liberties from scratch on
//! every placement rather than diffing them incrementally (the same
//! trade-off `jsgf-rust-go`'s `Board::play` makes) — at 81 cells this is
//! cheap, and it sidesteps an entire class of incremental-liberty bugs.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::geometry::{Color, Position, PositionSet, NUM_CELLS, SIZE};
use crate::group::{Group, GroupId};

/// Which ko rule a `Board` enforces. Positional superko is the default
/// (spec.md's open question (a) resolves to superko-by-default with simple
/// ko available as an explicit alternative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KoRule {
    /// Forbid any move that would recreate a whole-board configuration
    /// that has already occurred earlier in this game.
    PositionalSuperko,
    /// Forbid only the immediate single-stone recapture at the point just
    /// captured, for exactly one ply.
    Simple,
}

/// Zobrist table: one random u64 per (position, color), built once and
/// reused for every `Board`. Built lazily via `OnceLock`, the same idiom
/// the teacher crate uses for its 3x3 pattern table (`patterns::PAT3SET`).
fn zobrist_table() -> &'static [[u64; 2]; NUM_CELLS] {
    static TABLE: OnceLock<[[u64; 2]; NUM_CELLS]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let rng = fastrand::Rng::with_seed(0xba_5c_c0_de_13_37_aa_bb_u64);
        let mut table = [[0u64; 2]; NUM_CELLS];
        for cell in table.iter_mut() {
            cell[0] = rng.u64(..);
            cell[1] = rng.u64(..);
        }
        table
    })
}

fn zobrist_bit(pos: Position, color: Color) -> u64 {
    zobrist_table()[pos.index()][color as usize]
}

/// The live board: a flat grid mapping each cell to an occupying group
/// (by id), the arena of live groups, and ko-enforcement state.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [Option<GroupId>; NUM_CELLS],
    groups: Vec<Option<Group>>,
    free_ids: Vec<GroupId>,
    ko_rule: KoRule,
    history: HashSet<u64>,
    simple_ko_point: Option<Position>,
    hash: u64,
}

impl Board {
    pub fn new(ko_rule: KoRule) -> Board {
        let mut history = HashSet::new();
        history.insert(0);
        Board {
            grid: [None; NUM_CELLS],
            groups: Vec::new(),
            free_ids: Vec::new(),
            ko_rule,
            history,
            simple_ko_point: None,
            hash: 0,
        }
    }

    pub fn ko_rule(&self) -> KoRule {
        self.ko_rule
    }

    /// The group occupying `pos`, if any.
    pub fn group_at(&self, pos: Position) -> Option<&Group> {
        self.grid[pos.index()].map(|id| self.groups[id.0 as usize].as_ref().unwrap())
    }

    pub fn group(&self, id: GroupId) -> &Group {
        self.groups[id.0 as usize].as_ref().expect("dangling GroupId")
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.grid[pos.index()].is_none()
    }

    pub fn stone_at(&self, pos: Position) -> Option<Color> {
        self.group_at(pos).map(|g| g.color)
    }

    /// All live groups of `color`.
    pub fn groups_of(&self, color: Color) -> impl Iterator<Item = (GroupId, &Group)> {
        self.groups.iter().enumerate().filter_map(move |(i, g)| {
            g.as_ref().filter(|g| g.color == color).map(|g| (GroupId(i as u8), g))
        })
    }

    pub fn any_group_in_atari(&self, color: Color) -> bool {
        self.groups_of(color).any(|(_, g)| g.in_atari())
    }

    pub fn groups_in_atari(&self, color: Color) -> Vec<GroupId> {
        self.groups_of(color).filter(|(_, g)| g.in_atari()).map(|(id, _)| id).collect()
    }

    /// Minimum liberty count across all live groups of `color`, or 0 if
    /// `color` has no groups on the board. Used by the minimax evaluation.
    pub fn min_liberties(&self, color: Color) -> i32 {
        self.groups_of(color).map(|(_, g)| g.num_liberties() as i32).min().unwrap_or(0)
    }

    fn allocate_group(&mut self, group: Group) -> GroupId {
        if let Some(id) = self.free_ids.pop() {
            self.groups[id.0 as usize] = Some(group);
            id
        } else {
            let id = GroupId(self.groups.len() as u8);
            self.groups.push(Some(group));
            id
        }
    }

    fn free_group(&mut self, id: GroupId) -> Group {
        let g = self.groups[id.0 as usize].take().expect("double free of GroupId");
        self.free_ids.push(id);
        g
    }

    fn recompute_liberties(&self, stones: PositionSet) -> PositionSet {
        let mut libs = PositionSet::new();
        for s in stones.iter() {
            for n in s.orthogonal_neighbors() {
                if self.is_empty_at(n) {
                    libs.add(n);
                }
            }
        }
        libs
    }

    fn board_hash(&self) -> u64 {
        let mut h = 0u64;
        for idx in 0..NUM_CELLS {
            if let Some(id) = self.grid[idx] {
                let color = self.groups[id.0 as usize].as_ref().unwrap().color;
                h ^= zobrist_bit(Position::from_index(idx), color);
            }
        }
        h
    }

    /// Attempt to place a stone of `color` at `pos`. Returns `true` and
    /// mutates the board if the move is legal; otherwise leaves the board
    /// unchanged and returns `false`. Never panics on an illegal move -
    /// illegality is reported through the return value, per spec.md §7.
    pub fn place_stone(&mut self, color: Color, pos: Position) -> bool {
        if !pos.on_grid() || !self.is_empty_at(pos) {
            return false;
        }
        if self.ko_rule == KoRule::Simple && self.simple_ko_point == Some(pos) {
            return false;
        }

        let mut trial = self.clone();

        let mut friendly_ids = Vec::new();
        let mut enemy_ids = Vec::new();
        for n in pos.orthogonal_neighbors() {
            if let Some(id) = trial.grid[n.index()] {
                let c = trial.group(id).color;
                if c == color {
                    if !friendly_ids.contains(&id) {
                        friendly_ids.push(id);
                    }
                } else if !enemy_ids.contains(&id) {
                    enemy_ids.push(id);
                }
            }
        }

        // Merge friendly groups (plus the new stone) into one candidate
        // group, reusing the first merged id so the arena doesn't grow
        // unnecessarily.
        let mut merged_stones = PositionSet::single(pos);
        for &id in &friendly_ids {
            merged_stones.union_with(trial.free_group(id).stones);
        }
        let new_id = if let Some(&reused) = friendly_ids.first() {
            // `free_group` above pushed `reused` onto `free_ids`; it's being
            // re-occupied right here, not actually freed, so undo that or a
            // later `allocate_group` could pop it out from under us.
            trial.free_ids.retain(|&x| x != reused);
            trial.groups[reused.0 as usize] = Some(Group::new(color, merged_stones, PositionSet::new()));
            reused
        } else {
            trial.allocate_group(Group::new(color, merged_stones, PositionSet::new()))
        };
        for s in merged_stones.iter() {
            trial.grid[s.index()] = Some(new_id);
        }

        // Remove pos as a liberty from adjacent enemy groups, and capture
        // any of them that this leaves with no liberties.
        let mut captured_stones = PositionSet::new();
        for &id in &enemy_ids {
            let g = trial.groups[id.0 as usize].as_mut().unwrap();
            g.liberties.remove(pos);
            if g.liberties.is_empty() {
                let dead = trial.free_group(id);
                for s in dead.stones.iter() {
                    trial.grid[s.index()] = None;
                }
                captured_stones.union_with(dead.stones);
            }
        }

        // Recompute the candidate group's liberties against the
        // post-capture grid.
        let final_stones = trial.group(new_id).stones;
        let new_libs = trial.recompute_liberties(final_stones);
        trial.groups[new_id.0 as usize].as_mut().unwrap().liberties = new_libs;

        let suicide = new_libs.is_empty() && captured_stones.is_empty();
        if suicide {
            return false;
        }

        // Stones freed by a capture may restore liberties to neighboring
        // surviving groups; recompute those too. At 9x9 this is cheap
        // enough to just redo for every remaining live group adjacent to
        // a captured stone.
        if !captured_stones.is_empty() {
            let mut touched = Vec::new();
            for cs in captured_stones.iter() {
                for n in cs.orthogonal_neighbors() {
                    if let Some(id) = trial.grid[n.index()] {
                        if id != new_id && !touched.contains(&id) {
                            touched.push(id);
                        }
                    }
                }
            }
            for id in touched {
                let stones = trial.group(id).stones;
                let libs = trial.recompute_liberties(stones);
                trial.groups[id.0 as usize].as_mut().unwrap().liberties = libs;
            }
        }

        trial.hash = trial.board_hash();

        if trial.ko_rule == KoRule::PositionalSuperko && trial.history.contains(&trial.hash) {
            return false;
        }

        // Simple-ko bookkeeping: a single recaptured stone, replaced by a
        // single-stone group with exactly one liberty, is the classic ko
        // shape.
        trial.simple_ko_point = if captured_stones.len() == 1
            && trial.group(new_id).stones.len() == 1
            && trial.group(new_id).liberties.len() == 1
        {
            captured_stones.first()
        } else {
            None
        };
        trial.history.insert(trial.hash);

        trial.debug_check_invariants();
        *self = trial;
        true
    }

    /// Register a pass. Clears the one-ply simple-ko restriction, exactly
    /// as any other move would.
    pub fn pass(&mut self) {
        self.simple_ko_point = None;
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        for slot in self.groups.iter() {
            let Some(g) = slot else { continue };
            debug_assert!(!g.stones.is_empty(), "I1 violated: empty group in arena");
            for s in g.stones.iter() {
                debug_assert_eq!(self.stone_at(s), Some(g.color), "I2 violated: grid/group color mismatch");
            }
            let expected = self.recompute_liberties(g.stones);
            debug_assert_eq!(g.liberties, expected, "I4 violated: stale liberties");
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let c = match self.stone_at(Position::new(row as i32, col as i32)) {
                    None => '.',
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
