//! Anti-ladder reader: defend against an opponent ladder threatening one
//! of our own 2-liberty groups, optionally preferring defenses that touch
//! an existing friendly stone.

use super::ReaderOutcome;
use crate::board::Board;
use crate::bot::BotConfig;
use crate::geometry::{Color, Position};
use crate::readers::ladder::find_ladder_move;
use crate::rules::is_in_atari;

/// If the opponent currently has a working ladder against one of our
/// groups, find every legal move of ours that defuses it (the opponent no
/// longer has a working ladder afterwards, and we don't end up in atari
/// ourselves). When `anti_ladder_nearest` is set, prefer defenses
/// touching an existing friendly stone, falling back to the unfiltered
/// set if none qualify.
pub fn anti_ladder_moves(board: &Board, color: Color, config: &BotConfig) -> ReaderOutcome {
    let enemy = color.other();
    if find_ladder_move(board, enemy, config.anti_ladder_depth).is_none() {
        return ReaderOutcome::Moves(Vec::new());
    }

    let mut candidates = Vec::new();
    for idx in 0..crate::geometry::NUM_CELLS {
        let pos = Position::from_index(idx);
        if !board.is_empty_at(pos) {
            continue;
        }
        let mut trial = board.clone();
        if !trial.place_stone(color, pos) {
            continue;
        }
        if is_in_atari(&trial, color) {
            continue;
        }
        if find_ladder_move(&trial, enemy, config.anti_ladder_depth).is_none() {
            candidates.push(pos);
        }
    }

    if candidates.is_empty() {
        return if config.can_resign { ReaderOutcome::MustResign } else { ReaderOutcome::Moves(Vec::new()) };
    }

    if config.anti_ladder_nearest {
        let near: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|&p| p.orthogonal_neighbors().iter().any(|&n| board.stone_at(n) == Some(color)))
            .collect();
        if !near.is_empty() {
            return ReaderOutcome::Moves(near);
        }
    }
    ReaderOutcome::Moves(candidates)
}
