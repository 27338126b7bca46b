//! Error types for the host-facing engine surface. Illegal moves are
//! reported as plain `bool`s deeper in the stack (`Board::place_stone`,
//! `Bot::play`) per `spec.md` §7 - they are never exceptional here
//! either. `BadHandle` is the one error condition this crate reports to
//! its caller as a real `Result`.

use thiserror::Error;

use crate::engine::BotHandle;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    #[error("no bot is registered under handle {0:?}")]
    BadHandle(BotHandle),
}
