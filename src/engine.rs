//! The external, host-facing interface: a small handle registry so a host
//! process can own several independent bots without reaching into their
//! internals. This is the surface spec.md §6 describes - not a protocol
//! server (GTP, the I/O shell that would sit in front of this, is a
//! separate collaborator and out of scope here).

use std::collections::HashMap;

use log::{info, warn};

use crate::bot::{Bot, BotConfig, GenMove, Level, Move};
use crate::error::EngineError;
use crate::geometry::Color;

/// An opaque reference to a bot instance owned by an `Engine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BotHandle(u64);

#[derive(Default)]
pub struct Engine {
    bots: HashMap<BotHandle, Bot>,
    next_id: u64,
}

impl Engine {
    pub fn new() -> Engine {
        Engine { bots: HashMap::new(), next_id: 0 }
    }

    /// Create a new bot at the given level, playing `color`, and return a
    /// handle to it.
    pub fn new_bot(&mut self, level: Level, color: Color) -> BotHandle {
        let handle = BotHandle(self.next_id);
        self.next_id += 1;
        info!("engine: created bot {handle:?} ({color}, {level:?})");
        self.bots.insert(handle, Bot::new(color, level.preset()));
        handle
    }

    /// Like `new_bot`, but with an explicit RNG seed - useful for
    /// deterministic tests.
    pub fn new_bot_seeded(&mut self, level: Level, color: Color, seed: u64) -> BotHandle {
        let handle = BotHandle(self.next_id);
        self.next_id += 1;
        self.bots.insert(handle, Bot::with_seed(color, level.preset(), seed));
        handle
    }

    /// Create a bot with an explicit, non-preset configuration.
    pub fn new_bot_with_config(&mut self, config: BotConfig, color: Color) -> BotHandle {
        let handle = BotHandle(self.next_id);
        self.next_id += 1;
        self.bots.insert(handle, Bot::new(color, config));
        handle
    }

    /// Register a move (from either side) on the given bot's board.
    pub fn play(&mut self, handle: BotHandle, mv: Move) -> Result<bool, EngineError> {
        self.bots.get_mut(&handle).map(|bot| bot.play(mv)).ok_or(EngineError::BadHandle(handle))
    }

    /// Ask a bot for its next move.
    pub fn get_move(&mut self, handle: BotHandle) -> Result<GenMove, EngineError> {
        self.bots.get_mut(&handle).map(|bot| bot.get_move()).ok_or(EngineError::BadHandle(handle))
    }

    /// The reference board serialization (`.`/`B`/`W`) for a bot's
    /// current view of the game.
    pub fn render_board(&self, handle: BotHandle) -> Result<String, EngineError> {
        self.bots.get(&handle).map(|bot| bot.board().to_string()).ok_or(EngineError::BadHandle(handle))
    }

    /// Tear down a bot, freeing its resources.
    pub fn destroy(&mut self, handle: BotHandle) -> Result<(), EngineError> {
        if self.bots.remove(&handle).is_some() {
            info!("engine: destroyed bot {handle:?}");
            Ok(())
        } else {
            warn!("engine: destroy called on unknown handle {handle:?}");
            Err(EngineError::BadHandle(handle))
        }
    }
}
