//! Core types shared by every game: players and deterministic RNG.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
