//! Rules traits for game implementations.
//!
//! Games implement `GameState` and `Game` to define:
//! - Legal moves for each position
//! - How moves produce new positions
//! - When the game ends and who won
//!
//! Searches and strategies call into these traits but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameResult, GameState, MoveOf};
