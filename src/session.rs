//! Turn-by-turn driver seating one strategy per player.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, GameResult, GameState};
use crate::strategy::Strategy;

/// Driver limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of moves before giving up (0 = unlimited).
    pub max_turns: u32,
    /// Consecutive unusable answers tolerated from one strategy.
    pub max_invalid_inputs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: 0,
            max_invalid_inputs: 3,
        }
    }
}

impl SessionConfig {
    /// Create with custom turn limit.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Create with custom invalid-input tolerance.
    pub fn with_max_invalid_inputs(mut self, attempts: u32) -> Self {
        self.max_invalid_inputs = attempts;
        self
    }
}

/// One move as played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub mv: String,
}

/// Summary of a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub result: GameResult,
    pub moves: Vec<MoveRecord>,
}

/// A game plus the two strategies playing it.
pub struct Session<G: Game> {
    game: G,
    config: SessionConfig,
    first: Box<dyn Strategy<G>>,
    second: Box<dyn Strategy<G>>,
}

impl<G: Game> Session<G> {
    /// Seat `first` as `Player::One` and `second` as `Player::Two`.
    pub fn new(
        game: G,
        config: SessionConfig,
        first: Box<dyn Strategy<G>>,
        second: Box<dyn Strategy<G>>,
    ) -> Self {
        Self {
            game,
            config,
            first,
            second,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Name of the strategy seated for `player`.
    pub fn strategy_name(&self, player: Player) -> &str {
        match player {
            Player::One => self.first.name(),
            Player::Two => self.second.name(),
        }
    }

    /// Play a single move for the side to move.
    ///
    /// Unusable answers (`None` or an illegal move) are asked again, up to
    /// `max_invalid_inputs` times in a row.
    pub fn step(&mut self) -> Result<MoveRecord> {
        let state = self.game.current_state();
        if self.game.is_over(state) {
            return Err(Error::NoLegalMoves);
        }
        let player = state.current_player();

        let mut attempts = 0;
        loop {
            let strategy = match player {
                Player::One => &mut self.first,
                Player::Two => &mut self.second,
            };

            match strategy.choose_move(&self.game)? {
                Some(mv) if self.game.current_state().is_legal(&mv) => {
                    self.game.play(&mv)?;
                    debug!(%player, %mv, "move played");
                    return Ok(MoveRecord {
                        player,
                        mv: mv.to_string(),
                    });
                }
                answer => {
                    attempts += 1;
                    warn!(%player, attempts, ?answer, "unusable move");
                    if attempts > self.config.max_invalid_inputs {
                        return Err(Error::TooManyInvalidMoves { player, attempts });
                    }
                }
            }
        }
    }

    /// Play until the game is over.
    pub fn play(&mut self) -> Result<MatchReport> {
        info!(
            p1 = self.first.name(),
            p2 = self.second.name(),
            "session started"
        );

        let mut moves = Vec::new();
        while !self.game.is_over(self.game.current_state()) {
            let limit = self.config.max_turns;
            if limit > 0 && moves.len() as u32 >= limit {
                return Err(Error::TurnLimitExceeded { limit });
            }
            moves.push(self.step()?);
        }

        let result = self
            .game
            .outcome(self.game.current_state())
            .ok_or(Error::NoLegalMoves)?;
        info!(%result, turns = moves.len(), "session finished");

        Ok(MatchReport { result, moves })
    }
}
