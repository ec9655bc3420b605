//! Strategies: anything that can pick a move for the side to move.
//!
//! Every player, human or machine, is a `Strategy`, so a driver can seat
//! any mix of them without caring which is which.

pub mod policy;

pub use policy::{Interactive, RandomMove, RoughOutcome};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::{Error, Result};
use crate::rules::{Game, MoveOf};
use crate::search::{IterativeNegamax, RecursiveNegamax, SearchConfig};

/// Something that picks moves.
pub trait Strategy<G: Game> {
    /// Short human-readable name.
    fn name(&self) -> &str;

    /// Pick a move for the side to move in `game`'s current state.
    ///
    /// `Ok(None)` means the strategy produced nothing usable this time
    /// (e.g. unparseable input) and may be asked again.
    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>>;
}

/// Selectable strategy families, keyed by short codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// `i`: ask a human on stdin.
    Interactive,
    /// `r`: uniform random.
    Random,
    /// `h`: one-ply rough outcome.
    RoughOutcome,
    /// `mr`: recursive minimax.
    RecursiveMinimax,
    /// `mi`: iterative minimax.
    IterativeMinimax,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Interactive,
        StrategyKind::Random,
        StrategyKind::RoughOutcome,
        StrategyKind::RecursiveMinimax,
        StrategyKind::IterativeMinimax,
    ];

    /// Selection code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            StrategyKind::Interactive => "i",
            StrategyKind::Random => "r",
            StrategyKind::RoughOutcome => "h",
            StrategyKind::RecursiveMinimax => "mr",
            StrategyKind::IterativeMinimax => "mi",
        }
    }

    /// Build a boxed strategy of this kind.
    ///
    /// `rng` seeds random players; searches use `config`.
    pub fn build<G: Game + 'static>(
        self,
        config: &SearchConfig,
        rng: &mut GameRng,
    ) -> Box<dyn Strategy<G>> {
        match self {
            StrategyKind::Interactive => Box::new(Interactive::stdio()),
            StrategyKind::Random => Box::new(RandomMove::from_rng(rng.fork())),
            StrategyKind::RoughOutcome => Box::new(RoughOutcome),
            StrategyKind::RecursiveMinimax => Box::new(RecursiveNegamax::new(config.clone())),
            StrategyKind::IterativeMinimax => Box::new(IterativeNegamax::new(config.clone())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::UnknownStrategy { code: s.to_string() })
    }
}
