//! # stonehenge-solver
//!
//! Exhaustive negamax search for two-player, perfect-information,
//! turn-based games, with Stonehenge as the flagship game.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: Searches only see the `Game` and
//!    `GameState` traits. Any game implementing them can be solved.
//!
//! 2. **Immutable Positions**: `apply_move` returns a new state. Persistent
//!    vectors from `im-rs` keep successor states cheap to build.
//!
//! 3. **Swappable Players**: Humans, heuristics and searches all implement
//!    `Strategy`, so a `Session` can seat any pair of them.
//!
//! ## Modules
//!
//! - `core`: Players, per-player maps, deterministic RNG
//! - `rules`: `Game` / `GameState` traits and `GameResult`
//! - `games`: Stonehenge and Subtract Square
//! - `search`: Recursive and iterative negamax
//! - `strategy`: Move pickers (search, heuristic, random, interactive)
//! - `session`: Turn-by-turn driver

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerMap};

pub use crate::error::{Error, Result};

pub use crate::rules::{Game, GameResult, GameState, MoveOf};

pub use crate::games::{
    StonehengeConfig, StonehengeGame, StonehengeState,
    SubtractSquareGame, SubtractSquareState,
};

pub use crate::search::{
    IterativeNegamax, Negamax, RecursiveNegamax, Score,
    SearchConfig, SearchStats, SearchTree,
};

pub use crate::strategy::{Interactive, RandomMove, RoughOutcome, Strategy, StrategyKind};

pub use crate::session::{MatchReport, MoveRecord, Session, SessionConfig};
