//! Subtract Square state and rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState};

const INSTRUCTIONS: &str = "\
Players take turns subtracting a positive square number (1, 4, 9, ...) \
from the current value. A square larger than the value may not be taken. \
The player who brings the value to 0 wins.";

/// Pile value plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    /// Stones left.
    pub value: u32,

    to_move: Player,
}

impl SubtractSquareState {
    /// Create a position with `value` stones and `first` to move.
    #[must_use]
    pub fn new(value: u32, first: Player) -> Self {
        Self {
            value,
            to_move: first,
        }
    }
}

impl GameState for SubtractSquareState {
    type Move = u32;

    fn current_player(&self) -> Player {
        self.to_move
    }

    /// Squares from 1 upward.
    fn legal_moves(&self) -> Vec<u32> {
        (1..)
            .map_while(|k: u32| k.checked_mul(k))
            .take_while(|&sq| sq <= self.value)
            .collect()
    }

    fn is_legal(&self, mv: &u32) -> bool {
        let root = f64::from(*mv).sqrt() as u32;
        *mv > 0 && *mv <= self.value && root * root == *mv
    }

    fn apply_move(&self, mv: &u32) -> Result<Self> {
        if !self.is_legal(mv) {
            return Err(Error::illegal(mv));
        }

        Ok(Self {
            value: self.value - mv,
            to_move: self.to_move.other(),
        })
    }
}

impl fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value: {}, to move: {}", self.value, self.to_move)
    }
}

/// A Subtract Square game in progress.
#[derive(Clone, Debug)]
pub struct SubtractSquareGame {
    current: SubtractSquareState,
}

impl SubtractSquareGame {
    /// Start a game at `value` with `first` to move.
    #[must_use]
    pub fn new(value: u32, first: Player) -> Self {
        Self {
            current: SubtractSquareState::new(value, first),
        }
    }
}

impl Game for SubtractSquareGame {
    type State = SubtractSquareState;

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn current_state(&self) -> &SubtractSquareState {
        &self.current
    }

    fn set_current_state(&mut self, state: SubtractSquareState) {
        self.current = state;
    }

    fn is_over(&self, state: &SubtractSquareState) -> bool {
        state.value == 0
    }

    fn is_winner(&self, state: &SubtractSquareState, player: Player) -> bool {
        self.is_over(state) && state.current_player() != player
    }

    fn parse_move(&self, text: &str) -> Option<u32> {
        text.trim().parse().ok()
    }
}
