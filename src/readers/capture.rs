//! Capture reader: find moves that immediately capture an enemy group.

use crate::board::Board;
use crate::geometry::{Color, Position};
use crate::rules::is_valid_move;

/// Every legal move that fills the last liberty of some enemy group.
pub fn capture_moves(board: &Board, color: Color) -> Vec<Position> {
    let enemy = color.other();
    let mut out = Vec::new();
    for (_, g) in board.groups_of(enemy) {
        if g.in_atari() {
            if let Some(liberty) = g.liberties.first() {
                if is_valid_move(board, color, liberty) && !out.contains(&liberty) {
                    out.push(liberty);
                }
            }
        }
    }
    out
}
