//! Exhaustive negamax search.
//!
//! ## Overview
//!
//! Every position gets a score in `{-1, 0, 1}` from the point of view of
//! the side to move there:
//!
//! - finished games score `1` if the side to move won, `-1` if the other
//!   side won, `0` for a tie
//! - otherwise the score is the best of `-score(child)` over all moves
//!
//! At the root, the chosen move is the first (in legal-move order) whose
//! child has the lowest score, i.e. the one worst for the opponent.
//!
//! Two interchangeable implementations are provided:
//!
//! - `RecursiveNegamax`: plain depth-first recursion, with a depth guard
//! - `IterativeNegamax`: explicit work stack over an arena tree, no native
//!   recursion at all
//!
//! ## Usage
//!
//! ```rust
//! use stonehenge_solver::games::StonehengeGame;
//! use stonehenge_solver::search::{IterativeNegamax, Negamax, RecursiveNegamax, SearchConfig};
//!
//! let game = StonehengeGame::with_side(2).unwrap();
//!
//! let mut recursive = RecursiveNegamax::new(SearchConfig::default());
//! let mut iterative = IterativeNegamax::new(SearchConfig::default());
//!
//! let a = recursive.best_move(&game).unwrap();
//! let b = iterative.best_move(&game).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! No pruning and no time budget: both searches are only suitable for
//! games whose trees are small enough to walk completely.

pub mod config;
pub mod iterative;
pub mod node;
pub mod recursive;
pub mod stats;
pub mod tree;

pub use config::SearchConfig;
pub use iterative::IterativeNegamax;
pub use node::{NodeId, SearchNode};
pub use recursive::RecursiveNegamax;
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};

use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};

/// Negamax score from the side to move's point of view.
pub type Score = i8;

/// Score of a finished position, or `None` while play continues.
pub fn terminal_score<G: Game>(game: &G, state: &G::State) -> Option<Score> {
    game.outcome(state)
        .map(|result| result.score_for(state.current_player()))
}

/// Pick the root move whose child score is lowest, first one on ties.
pub(crate) fn pick_lowest<M: Clone>(scored: impl IntoIterator<Item = (M, Score)>) -> Result<M> {
    let mut best: Option<(M, Score)> = None;
    for (mv, score) in scored {
        match best {
            Some((_, current)) if score >= current => {}
            _ => best = Some((mv, score)),
        }
    }
    best.map(|(mv, _)| mv).ok_or(Error::NoLegalMoves)
}

/// Common interface of the negamax searches.
pub trait Negamax {
    /// Score `state` for its side to move.
    ///
    /// Pure with respect to `game`: the game's current state is never read
    /// or modified.
    fn evaluate<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Score>;

    /// Best move from `state`.
    ///
    /// Fails with `Error::NoLegalMoves` if `state` is already over or has no
    /// moves.
    fn best_move_from<G: Game>(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>>;

    /// Statistics of the most recent call.
    fn stats(&self) -> &SearchStats;

    /// Best move from the game's current state.
    fn best_move<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>> {
        self.best_move_from(game, game.current_state())
    }
}
