//! Bot configuration, level presets, and the fixed-priority move-selection
//! pipeline that composes the rule helpers, readers, minimax, and
//! rollout sampler into a single decision per turn.

use log::{debug, info};

use crate::board::{Board, KoRule};
use crate::geometry::{Color, Position};
use crate::minimax;
use crate::readers::{anti_capture_moves, anti_ladder_moves, capture_moves, find_ladder_move, ReaderOutcome};
use crate::rollout;

/// Parameters controlling how hard a bot looks before moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotConfig {
    pub mcts_visits: u32,
    pub ladder_depth: u32,
    pub anti_ladder_depth: u32,
    pub minimax_depth: u32,
    pub anti_ladder_nearest: bool,
    pub can_resign: bool,
    pub minimax_ladder: bool,
}

/// Named difficulty presets, from `spec.md`'s level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Joke,
    Easy,
    Medium,
    Hard,
    Crazy,
    Demon,
}

impl Level {
    pub fn preset(self) -> BotConfig {
        match self {
            Level::Joke => BotConfig {
                mcts_visits: 5,
                ladder_depth: 0,
                anti_ladder_depth: 0,
                minimax_depth: 0,
                anti_ladder_nearest: false,
                can_resign: false,
                minimax_ladder: false,
            },
            Level::Easy => BotConfig {
                mcts_visits: 50,
                ladder_depth: 4,
                anti_ladder_depth: 4,
                minimax_depth: 1,
                anti_ladder_nearest: false,
                can_resign: false,
                minimax_ladder: false,
            },
            Level::Medium => BotConfig {
                mcts_visits: 100,
                ladder_depth: 6,
                anti_ladder_depth: 6,
                minimax_depth: 1,
                anti_ladder_nearest: false,
                can_resign: false,
                minimax_ladder: false,
            },
            Level::Hard => BotConfig {
                mcts_visits: 100,
                ladder_depth: 6,
                anti_ladder_depth: 6,
                minimax_depth: 1,
                anti_ladder_nearest: true,
                can_resign: true,
                minimax_ladder: false,
            },
            Level::Crazy => BotConfig {
                mcts_visits: 250,
                ladder_depth: 10,
                anti_ladder_depth: 10,
                minimax_depth: 1,
                anti_ladder_nearest: true,
                can_resign: true,
                minimax_ladder: true,
            },
            Level::Demon => BotConfig {
                mcts_visits: 500,
                ladder_depth: 10,
                anti_ladder_depth: 10,
                minimax_depth: 2,
                anti_ladder_nearest: true,
                can_resign: true,
                minimax_ladder: false,
            },
        }
    }
}

/// A move a bot can receive from its opponent: place a stone, or resign.
/// Passing is not representable here - it is only ever something a bot
/// itself reports via `GenMove::Pass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Place(Color, Position),
    Resign(Color),
}

/// What `Bot::get_move` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMove {
    Play(Position),
    Resign,
    Pass,
}

/// A single bot instance: its own color, configuration, and view of the
/// live board.
pub struct Bot {
    color: Color,
    config: BotConfig,
    board: Board,
    rng: fastrand::Rng,
}

impl Bot {
    pub fn new(color: Color, config: BotConfig) -> Bot {
        Bot { color, config, board: Board::new(KoRule::PositionalSuperko), rng: fastrand::Rng::new() }
    }

    pub fn with_seed(color: Color, config: BotConfig, seed: u64) -> Bot {
        Bot { color, config, board: Board::new(KoRule::PositionalSuperko), rng: fastrand::Rng::with_seed(seed) }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Register a move played by either side onto the bot's own board.
    /// Returns `false` if a `Place` move is illegal; resignations are
    /// always accepted.
    pub fn play(&mut self, mv: Move) -> bool {
        match mv {
            Move::Place(color, pos) => self.board.place_stone(color, pos),
            Move::Resign(_) => true,
        }
    }

    fn pick(&self, moves: &[Position]) -> Position {
        moves[self.rng.usize(..moves.len())]
    }

    fn commit(&mut self, pos: Position) {
        let ok = self.board.place_stone(self.color, pos);
        debug_assert!(ok, "a reader-selected move must be legal");
    }

    /// Run the fixed-priority pipeline and produce this bot's next move,
    /// applying it to the bot's own board in the process (mirroring how a
    /// GTP `genmove` both decides and plays a move).
    pub fn get_move(&mut self) -> GenMove {
        let color = self.color;

        let caps = capture_moves(&self.board, color);
        if !caps.is_empty() {
            let mv = self.pick(&caps);
            info!("bot({color}): capture reader selected {mv}");
            self.commit(mv);
            return GenMove::Play(mv);
        }

        match anti_capture_moves(&self.board, color, self.config.can_resign) {
            ReaderOutcome::MustResign => {
                info!("bot({color}): anti-capture reader says resign");
                return GenMove::Resign;
            }
            ReaderOutcome::Moves(moves) if !moves.is_empty() => {
                let mv = self.pick(&moves);
                info!("bot({color}): anti-capture reader selected {mv}");
                self.commit(mv);
                return GenMove::Play(mv);
            }
            ReaderOutcome::Moves(_) => {}
        }

        if self.config.ladder_depth > 0 {
            if let Some(mv) = find_ladder_move(&self.board, color, self.config.ladder_depth) {
                info!("bot({color}): ladder reader selected {mv}");
                self.commit(mv);
                return GenMove::Play(mv);
            }
        }

        if self.config.anti_ladder_depth > 0 {
            match anti_ladder_moves(&self.board, color, &self.config) {
                ReaderOutcome::MustResign => {
                    info!("bot({color}): anti-ladder reader says resign");
                    return GenMove::Resign;
                }
                ReaderOutcome::Moves(moves) if !moves.is_empty() => {
                    let mv = self.pick(&moves);
                    info!("bot({color}): anti-ladder reader selected {mv}");
                    self.commit(mv);
                    return GenMove::Play(mv);
                }
                ReaderOutcome::Moves(_) => {}
            }
        }

        if self.config.minimax_depth > 0 {
            let moves = minimax::select(&self.board, color, self.config.minimax_depth, self.config.minimax_ladder);
            if !moves.is_empty() {
                let mv = self.pick(&moves);
                debug!("bot({color}): minimax selected {mv}");
                self.commit(mv);
                return GenMove::Play(mv);
            } else if self.config.can_resign {
                info!("bot({color}): minimax finds no move, resigning");
                return GenMove::Resign;
            }
        }

        if self.config.mcts_visits > 0 {
            if let Some(mv) = rollout::select(&self.board, color, self.config.mcts_visits, &self.rng) {
                debug!("bot({color}): rollout sampler selected {mv}");
                self.commit(mv);
                return GenMove::Play(mv);
            }
        }

        self.board.pass();
        GenMove::Pass
    }
}
