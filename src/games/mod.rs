//! Concrete games.

pub mod stonehenge;
pub mod subtract_square;

pub use stonehenge::{StonehengeConfig, StonehengeGame, StonehengeState};
pub use subtract_square::{SubtractSquareGame, SubtractSquareState};
