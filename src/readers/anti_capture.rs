//! Anti-capture reader: save a friendly group that is in atari, or signal
//! resignation when no escape exists and the bot is configured to resign.

use super::ReaderOutcome;
use crate::board::Board;
use crate::geometry::Color;
use crate::rules::{is_in_atari, is_move_self_capture};

/// For each friendly group in atari, try its sole liberty as an escape.
/// An escape that is itself a self-capture, or that leaves the group in
/// atari again, is not a real escape. If some group has no real escape,
/// the position calls for resignation when `can_resign` is set.
pub fn anti_capture_moves(board: &Board, color: Color, can_resign: bool) -> ReaderOutcome {
    if !is_in_atari(board, color) {
        return ReaderOutcome::Moves(Vec::new());
    }
    let mut moves = Vec::new();
    let mut any_unsaved = false;
    for id in board.groups_in_atari(color) {
        let liberty = board.group(id).liberties.first().expect("group in atari has one liberty");
        if is_move_self_capture(board, color, liberty) {
            any_unsaved = true;
            continue;
        }
        let mut trial = board.clone();
        if !trial.place_stone(color, liberty) {
            any_unsaved = true;
            continue;
        }
        if is_in_atari(&trial, color) {
            // Still in atari after "saving" it. Per spec.md §4.3 this only
            // disqualifies the escape when `can_resign` is set (in which
            // case it calls for resignation instead); otherwise it's still
            // the best desperate move available and must be offered.
            if can_resign {
                any_unsaved = true;
                continue;
            }
        }
        if !moves.contains(&liberty) {
            moves.push(liberty);
        }
    }
    if moves.is_empty() && any_unsaved && can_resign {
        return ReaderOutcome::MustResign;
    }
    ReaderOutcome::Moves(moves)
}
