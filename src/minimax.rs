//! Depth-limited minimax over a liberty-count evaluation, with a handful
//! of forced-outcome short circuits recognized at every node.

use crate::board::Board;
use crate::geometry::{Color, Position};
use crate::readers::find_ladder_move;
use crate::rules::{is_move_self_capture, is_point_an_eye, is_valid_move};

const WIN: i32 = 1000;
const LOSS: i32 = -1000;
/// Depth used when minimax consults the ladder reader as a short circuit;
/// matches the depth a dedicated ladder reader would use at this scale.
const LADDER_LOOKAHEAD: u32 = 6;

fn eval_position(board: &Board, friendly: Color) -> i32 {
    board.min_liberties(friendly) - board.min_liberties(friendly.other())
}

/// Moves minimax is willing to branch on for `mover`: legal, not
/// eye-filling, and not an immediate self-atari.
fn candidate_moves(board: &Board, mover: Color) -> Vec<Position> {
    (0..crate::geometry::NUM_CELLS)
        .map(Position::from_index)
        .filter(|&p| {
            is_valid_move(board, mover, p)
                && !is_point_an_eye(board, mover, p)
                && !leaves_self_in_atari(board, mover, p)
        })
        .collect()
}

fn leaves_self_in_atari(board: &Board, mover: Color, pos: Position) -> bool {
    let mut trial = board.clone();
    if !trial.place_stone(mover, pos) {
        return true;
    }
    trial.any_group_in_atari(mover)
}

/// Node-level short circuits, evaluated for the player `mover` who is
/// about to move at this node. Returns the terminal value from `mover`'s
/// perspective if the position is decisive, else `None`.
fn short_circuit(board: &Board, mover: Color, minimax_ladder: bool) -> Option<i32> {
    let opponent = mover.other();
    if board.any_group_in_atari(mover) {
        return Some(LOSS);
    }
    if minimax_ladder && find_ladder_move(board, opponent, LADDER_LOOKAHEAD).is_some() {
        return Some(LOSS);
    }
    let opponent_atari = board.groups_in_atari(opponent);
    if opponent_atari.len() >= 2 {
        return Some(WIN);
    }
    if opponent_atari.len() == 1 {
        let liberty = board.group(opponent_atari[0]).liberties.first().expect("atari group has one liberty");
        if is_move_self_capture(board, opponent, liberty) {
            return Some(WIN);
        }
    }
    None
}

/// Negamax search returning the value of `board` (with `mover` to move)
/// from `mover`'s perspective.
fn negamax(board: &Board, mover: Color, depth: u32, minimax_ladder: bool) -> i32 {
    if let Some(v) = short_circuit(board, mover, minimax_ladder) {
        return v;
    }
    if depth == 0 {
        return eval_position(board, mover);
    }
    let moves = candidate_moves(board, mover);
    if moves.is_empty() {
        return eval_position(board, mover);
    }
    let mut best = i32::MIN;
    for mv in moves {
        let mut child = board.clone();
        child.place_stone(mover, mv);
        let score = -negamax(&child, mover.other(), depth - 1, minimax_ladder);
        if score > best {
            best = score;
        }
    }
    best
}

/// Run minimax from the root for `mover`, returning every move that
/// achieves the maximum value (the caller breaks ties uniformly at
/// random, per spec.md).
pub fn select(board: &Board, mover: Color, depth: u32, minimax_ladder: bool) -> Vec<Position> {
    let moves = candidate_moves(board, mover);
    if moves.is_empty() {
        return Vec::new();
    }
    let scored: Vec<(Position, i32)> = moves
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.place_stone(mover, mv);
            let v = -negamax(&child, mover.other(), depth.saturating_sub(1), minimax_ladder);
            (mv, v)
        })
        .collect();
    let max = scored.iter().map(|&(_, v)| v).max().unwrap();
    scored.into_iter().filter(|&(_, v)| v == max).map(|(mv, _)| mv).collect()
}
