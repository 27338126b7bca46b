//! End-to-end scenarios against the public `baduk_engine` API, covering the
//! six concrete situations laid out for this engine: simple capture,
//! suicide rejection, ko, a working ladder, eye detection, and resignation
//! under a resigning-capable level.

use baduk_engine::board::{Board, KoRule};
use baduk_engine::bot::{Bot, GenMove, Level, Move};
use baduk_engine::engine::Engine;
use baduk_engine::geometry::{Color, Position};
use baduk_engine::readers::{anti_capture_moves, capture_moves, find_ladder_move, ReaderOutcome};
use baduk_engine::rules::{is_move_self_capture, is_point_an_eye, is_valid_move};

fn empty_board() -> Board {
    Board::new(KoRule::PositionalSuperko)
}

#[test]
fn simple_capture_removes_the_surrounded_stone() {
    // White at (0,1), walled in on all three of its on-grid orthogonal
    // neighbors by Black, is captured the instant the last wall stone
    // lands.
    let mut b = empty_board();
    assert!(b.place_stone(Color::White, Position::new(0, 1)));
    assert!(b.place_stone(Color::Black, Position::new(0, 0)));
    assert!(b.place_stone(Color::Black, Position::new(0, 2)));
    assert!(b.place_stone(Color::Black, Position::new(1, 1)));
    assert_eq!(b.stone_at(Position::new(0, 1)), None);
}

#[test]
fn suicide_is_rejected_and_board_is_unchanged() {
    // White stones at (0,1) and (1,0); Black playing (0,0) would have zero
    // liberties and captures nothing.
    let mut b = empty_board();
    assert!(b.place_stone(Color::White, Position::new(0, 1)));
    assert!(b.place_stone(Color::White, Position::new(1, 0)));
    assert!(is_move_self_capture(&b, Color::Black, Position::new(0, 0)));
    assert!(!is_valid_move(&b, Color::Black, Position::new(0, 0)));
    assert!(!b.place_stone(Color::Black, Position::new(0, 0)));
    assert_eq!(b.stone_at(Position::new(0, 0)), None);
    assert_eq!(b.stone_at(Position::new(0, 1)), Some(Color::White));
    assert_eq!(b.stone_at(Position::new(1, 0)), Some(Color::White));
}

#[test]
fn ko_blocks_immediate_recapture_but_allows_it_after_playing_elsewhere() {
    // Fence a single white stone at (4,4) down to one liberty at (4,5),
    // so that black's capturing stone at (4,5) itself ends up with one
    // liberty pointing straight back at (4,4) - the textbook ko shape.
    let mut b = empty_board();
    assert!(b.place_stone(Color::White, Position::new(4, 4)));
    assert!(b.place_stone(Color::Black, Position::new(3, 4)));
    assert!(b.place_stone(Color::Black, Position::new(5, 4)));
    assert!(b.place_stone(Color::Black, Position::new(4, 3)));
    assert!(b.place_stone(Color::White, Position::new(3, 5)));
    assert!(b.place_stone(Color::White, Position::new(5, 5)));
    assert!(b.place_stone(Color::White, Position::new(4, 6)));
    assert!(b.place_stone(Color::Black, Position::new(4, 5)));
    assert_eq!(b.stone_at(Position::new(4, 4)), None);

    assert!(!b.place_stone(Color::White, Position::new(4, 4)));
    assert!(b.place_stone(Color::Black, Position::new(8, 0)));
    assert!(b.place_stone(Color::White, Position::new(4, 4)));
    assert_eq!(b.stone_at(Position::new(4, 5)), None);
}

#[test]
fn ladder_reader_finds_the_working_chase_in_a_corner() {
    // White(0,1) with black already at (1,1): two liberties at (0,0) and
    // (0,2). Chasing via (0,0) would put black's own stone in atari, so
    // the only working ladder move is (0,2), driving white into the
    // corner where it runs out of room.
    let mut b = empty_board();
    assert!(b.place_stone(Color::White, Position::new(0, 1)));
    assert!(b.place_stone(Color::Black, Position::new(1, 1)));
    assert_eq!(find_ladder_move(&b, Color::Black, 6), Some(Position::new(0, 2)));

    // Playing the suggested move actually does force the ladder through to
    // capture, within the reader's own depth budget.
    assert!(b.place_stone(Color::Black, Position::new(0, 2)));
    assert_eq!(b.group_at(Position::new(0, 1)).unwrap().num_liberties(), 1);
    assert!(b.place_stone(Color::White, Position::new(0, 0)));
    assert_eq!(b.group_at(Position::new(0, 0)).unwrap().num_liberties(), 1);
    assert!(b.place_stone(Color::Black, Position::new(1, 0)));
    assert_eq!(b.stone_at(Position::new(0, 0)), None);
    assert_eq!(b.stone_at(Position::new(0, 1)), None);
}

#[test]
fn is_point_an_eye_reports_a_true_center_eye_and_loses_it_when_a_wall_stone_is_removed() {
    let mut b = empty_board();
    let center = Position::new(1, 1);
    for n in center.orthogonal_neighbors() {
        assert!(b.place_stone(Color::Black, n));
    }
    for d in center.diagonal_neighbors() {
        assert!(b.place_stone(Color::Black, d));
    }
    assert!(is_point_an_eye(&b, Color::Black, center));

    // A fresh board missing just one orthogonal wall stone is no longer
    // surrounded, so the point stops being an eye.
    let mut b2 = empty_board();
    let mut neighbors = center.orthogonal_neighbors();
    neighbors.pop();
    for n in neighbors {
        assert!(b2.place_stone(Color::Black, n));
    }
    assert!(!is_point_an_eye(&b2, Color::Black, center));
}

#[test]
fn is_point_an_eye_corner_requires_its_single_diagonal() {
    let mut b = empty_board();
    assert!(b.place_stone(Color::Black, Position::new(0, 1)));
    assert!(b.place_stone(Color::Black, Position::new(1, 0)));
    assert!(b.place_stone(Color::White, Position::new(1, 1)));
    assert!(!is_point_an_eye(&b, Color::Black, Position::new(0, 0)));

    let mut b2 = empty_board();
    assert!(b2.place_stone(Color::Black, Position::new(0, 1)));
    assert!(b2.place_stone(Color::Black, Position::new(1, 0)));
    assert!(b2.place_stone(Color::Black, Position::new(1, 1)));
    assert!(is_point_an_eye(&b2, Color::Black, Position::new(0, 0)));
}

#[test]
fn resignation_under_hard_when_atari_has_no_real_escape() {
    // Black's lone stone at (0,0) is down to one liberty at (0,1); white
    // already occupies (1,0), and playing (0,1) would still leave black
    // in atari with no counter-capture available, so HARD's anti-capture
    // reader should signal must-resign.
    let mut b = empty_board();
    assert!(b.place_stone(Color::Black, Position::new(0, 0)));
    assert!(b.place_stone(Color::White, Position::new(1, 0)));
    assert!(b.place_stone(Color::White, Position::new(1, 1)));
    assert!(b.place_stone(Color::White, Position::new(0, 2)));

    let config = Level::Hard.preset();
    let outcome = anti_capture_moves(&b, Color::Black, config.can_resign);
    assert_eq!(outcome, ReaderOutcome::MustResign);

    let mut bot = Bot::with_seed(Color::Black, config, 1);
    assert!(bot.play(Move::Place(Color::Black, Position::new(0, 0))));
    assert!(bot.play(Move::Place(Color::White, Position::new(1, 0))));
    assert!(bot.play(Move::Place(Color::White, Position::new(1, 1))));
    assert!(bot.play(Move::Place(Color::White, Position::new(0, 2))));
    assert_eq!(bot.get_move(), GenMove::Resign);
}

#[test]
fn capture_reader_moves_always_actually_capture_on_a_fresh_copy() {
    // Reader-monotonicity: every move the capture reader names must, when
    // played on an independent copy of the same board, remove at least one
    // enemy stone.
    let mut b = empty_board();
    assert!(b.place_stone(Color::White, Position::new(4, 4)));
    assert!(b.place_stone(Color::Black, Position::new(3, 4)));
    assert!(b.place_stone(Color::Black, Position::new(5, 4)));
    assert!(b.place_stone(Color::Black, Position::new(4, 3)));

    let moves = capture_moves(&b, Color::Black);
    assert!(!moves.is_empty());
    for mv in moves {
        let mut copy = b.clone();
        let before = copy.stone_at(Position::new(4, 4));
        assert!(copy.place_stone(Color::Black, mv));
        assert!(before.is_some());
        assert_eq!(copy.stone_at(Position::new(4, 4)), None);
    }
}

#[test]
fn board_copy_is_independent_of_the_original() {
    let mut b = empty_board();
    assert!(b.place_stone(Color::Black, Position::new(4, 4)));
    let serialized_before = b.to_string();

    let mut copy = b.clone();
    assert!(copy.place_stone(Color::White, Position::new(0, 0)));

    assert_eq!(b.to_string(), serialized_before);
    assert_eq!(b.stone_at(Position::new(0, 0)), None);
    assert_eq!(copy.stone_at(Position::new(0, 0)), Some(Color::White));
}

#[test]
fn engine_lifecycle_tracks_independent_bots_by_handle() {
    let mut engine = Engine::new();
    let black = engine.new_bot_seeded(Level::Easy, Color::Black, 11);
    let white = engine.new_bot_seeded(Level::Easy, Color::White, 12);

    assert!(engine.play(black, Move::Place(Color::Black, Position::new(4, 4))).unwrap());
    assert!(engine.play(white, Move::Place(Color::Black, Position::new(4, 4))).unwrap());

    let rendered = engine.render_board(black).unwrap();
    assert_eq!(rendered.lines().count(), 9);

    engine.destroy(black).unwrap();
    assert!(engine.get_move(black).is_err());
    engine.destroy(white).unwrap();
}

#[test]
fn a_long_self_play_game_never_trips_a_debug_invariant_assertion() {
    // `Board::place_stone` runs `debug_check_invariants` after every
    // successful placement in debug builds; simply driving a full JOKE-vs-
    // JOKE self-play game to completion is a reasonable smoke test for
    // invariants I1-I4 holding across many incremental placements.
    let mut engine = Engine::new();
    let black = engine.new_bot_seeded(Level::Joke, Color::Black, 7);
    let white = engine.new_bot_seeded(Level::Joke, Color::White, 8);
    let mut to_move = Color::Black;
    for _ in 0..40 {
        let (mover, other) = if to_move == Color::Black { (black, white) } else { (white, black) };
        match engine.get_move(mover).unwrap() {
            GenMove::Play(pos) => {
                assert!(engine.play(other, Move::Place(to_move, pos)).unwrap());
            }
            GenMove::Resign | GenMove::Pass => break,
        }
        to_move = to_move.other();
    }
}
