//! The Stonehenge rules authority.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::board::{Board, CellId, MAX_SIDE};
use super::state::StonehengeState;
use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState};

const INSTRUCTIONS: &str = "\
Players take turns claiming cells by entering the cell's letter. \
Every cell lies on three ley-lines: one horizontal and two diagonal. \
The first player to claim at least half of the cells on a ley-line \
captures it for good. The first player to capture at least half of \
all ley-lines wins.";

/// Configuration for a Stonehenge game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StonehengeConfig {
    /// Board side length (1..=5).
    pub side_length: usize,

    /// Who moves first.
    pub first_player: Player,
}

impl Default for StonehengeConfig {
    fn default() -> Self {
        Self {
            side_length: 2,
            first_player: Player::One,
        }
    }
}

impl StonehengeConfig {
    /// Set the board side length.
    pub fn with_side_length(mut self, side: usize) -> Self {
        self.side_length = side;
        self
    }

    /// Set who moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}

/// A Stonehenge game in progress.
#[derive(Clone, Debug)]
pub struct StonehengeGame {
    config: StonehengeConfig,
    board: Arc<Board>,
    current: StonehengeState,
}

impl StonehengeGame {
    /// Build a game from its configuration.
    pub fn new(config: StonehengeConfig) -> Result<Self> {
        if config.side_length == 0 || config.side_length > MAX_SIDE {
            return Err(Error::InvalidSideLength {
                side: config.side_length,
            });
        }

        let board = Arc::new(Board::new(config.side_length)?);
        let current = StonehengeState::new(Arc::clone(&board), config.first_player);

        Ok(Self {
            config,
            board,
            current,
        })
    }

    /// Default game on a board of the given side length, player one first.
    pub fn with_side(side: usize) -> Result<Self> {
        Self::new(StonehengeConfig::default().with_side_length(side))
    }

    #[must_use]
    pub fn config(&self) -> &StonehengeConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The starting position of this game.
    #[must_use]
    pub fn initial_state(&self) -> StonehengeState {
        StonehengeState::new(Arc::clone(&self.board), self.config.first_player)
    }
}

impl Game for StonehengeGame {
    type State = StonehengeState;

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn current_state(&self) -> &StonehengeState {
        &self.current
    }

    fn set_current_state(&mut self, state: StonehengeState) {
        self.current = state;
    }

    fn is_over(&self, state: &StonehengeState) -> bool {
        state.is_decided()
    }

    /// The side that just moved wins once the game is over.
    fn is_winner(&self, state: &StonehengeState, player: Player) -> bool {
        self.is_over(state) && state.current_player() != player
    }

    fn parse_move(&self, text: &str) -> Option<CellId> {
        text.parse::<CellId>()
            .ok()
            .filter(|&cell| self.board.contains(cell))
    }

    /// Immediate wins and forced immediate losses score `1.0` and `-1.0`;
    /// otherwise the ley-line lead as a fraction of all lines.
    fn rough_outcome(&self, state: &StonehengeState) -> f64 {
        let mover = state.current_player();
        if let Some(result) = self.outcome(state) {
            return f64::from(result.score_for(mover));
        }

        if self.wins_immediately(state) {
            return 1.0;
        }
        if self.loses_immediately(state) {
            return -1.0;
        }

        let total = self.board.lines().len() as f64;
        (state.captured(mover) as f64 - state.captured(mover.other()) as f64) / total
    }
}
