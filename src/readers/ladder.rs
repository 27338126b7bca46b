//! Ladder reader: recursively check whether a 2-liberty enemy group can be
//! chased down a ladder to capture, bounded by a configurable read depth.

use crate::board::Board;
use crate::geometry::{Color, Position};
use crate::rules::is_valid_move;

/// Find a move that starts a successful capturing ladder against some
/// enemy group currently down to two liberties, reading at most
/// `depth_limit` plies ahead. Returns the first working move found.
pub fn find_ladder_move(board: &Board, color: Color, depth_limit: u32) -> Option<Position> {
    if depth_limit == 0 {
        return None;
    }
    let enemy = color.other();
    let two_lib_groups: Vec<Position> = board
        .groups_of(enemy)
        .filter(|(_, g)| g.num_liberties() == 2)
        .map(|(_, g)| g.stones.first().expect("non-empty group"))
        .collect();

    for target in two_lib_groups {
        let liberties = board.group_at(target).expect("group still present").liberties;
        for h in liberties.iter() {
            if !is_valid_move(board, color, h) {
                continue;
            }
            let mut after_h = board.clone();
            after_h.place_stone(color, h);
            if after_h.any_group_in_atari(color) {
                // Playing h leaves the chaser itself in atari - no good.
                continue;
            }
            let Some(chased) = after_h.group_at(target) else {
                // The hunted group vanished (captured outright); that is
                // success by definition.
                return Some(h);
            };
            if chased.color != enemy || chased.num_liberties() != 1 {
                // Not forced into atari - this liberty doesn't pressure
                // the group the way a ladder needs.
                continue;
            }
            let forced_reply = chased.liberties.first().expect("atari group has one liberty");
            let mut after_reply = after_h.clone();
            if !after_reply.place_stone(enemy, forced_reply) {
                // Forced reply isn't actually legal for the enemy (e.g. it
                // would be their own suicide) - the group is simply dead.
                return Some(h);
            }
            if ladder_continues(&after_reply, color, forced_reply, depth_limit, 2) {
                return Some(h);
            }
        }
    }
    None
}

/// Recursive ladder continuation. `target_pos` is any stone belonging to
/// the group being chased at this ply.
fn ladder_continues(board: &Board, color: Color, target_pos: Position, depth_limit: u32, ply: u32) -> bool {
    if ply > depth_limit {
        return false;
    }
    if board.any_group_in_atari(color.other()) {
        return true;
    }
    let Some(chased) = board.group_at(target_pos) else {
        return true;
    };
    let enemy = color.other();
    if chased.color != enemy || chased.num_liberties() != 2 {
        return false;
    }
    let liberties = chased.liberties;
    for h in liberties.iter() {
        if !is_valid_move(board, color, h) {
            continue;
        }
        let mut after_h = board.clone();
        after_h.place_stone(color, h);
        if after_h.any_group_in_atari(color) {
            continue;
        }
        let Some(chased2) = after_h.group_at(target_pos) else {
            return true;
        };
        if chased2.color != enemy || chased2.num_liberties() != 1 {
            continue;
        }
        let forced_reply = chased2.liberties.first().expect("atari group has one liberty");
        let mut after_reply = after_h.clone();
        if !after_reply.place_stone(enemy, forced_reply) {
            return true;
        }
        if ladder_continues(&after_reply, color, forced_reply, depth_limit, ply + 1) {
            return true;
        }
    }
    false
}
