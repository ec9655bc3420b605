//! Subtract Square: take a square number of stones from a shared pile.
//!
//! - The pile starts at a chosen value
//! - A move removes a positive perfect square no larger than the pile
//! - Whoever empties the pile wins
//!
//! Small enough to solve exhaustively for any pile under a few dozen,
//! which makes it the reference game for search tests.

mod game;

pub use game::{SubtractSquareGame, SubtractSquareState};
