//! baduk-engine: core position evaluation and move selection for 9x9 Go.
//!
//! The crate is organized bottom-up:
//!
//! - [`geometry`] - coordinates, colors, sets of coordinates.
//! - [`group`] - connected chains of stones and their liberties.
//! - [`board`] - the live board: placement, captures, ko.
//! - [`rules`] - legality/atari/eye/self-capture helpers over a board.
//! - [`readers`] - tactical move generators (capture, ladder, ...).
//! - [`minimax`] - depth-limited search over a liberty-count evaluation.
//! - [`rollout`] - random-playout move sampler.
//! - [`bot`] - the fixed-priority driver tying the above together.
//! - [`engine`] - the host-facing handle registry.
//! - [`error`] - the engine's error type.
//!
//! ## Example
//!
//! ```
//! use baduk_engine::bot::Level;
//! use baduk_engine::engine::Engine;
//! use baduk_engine::geometry::Color;
//!
//! let mut engine = Engine::new();
//! let handle = engine.new_bot(Level::Easy, Color::Black);
//! let _move = engine.get_move(handle).unwrap();
//! ```

pub mod board;
pub mod bot;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod group;
pub mod minimax;
pub mod readers;
pub mod rollout;
pub mod rules;
