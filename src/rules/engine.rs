//! Capability traits for game implementations.
//!
//! A game is split in two roles:
//! - `GameState`: an immutable position plus the side to move
//! - `Game`: the rules authority holding the current position
//!
//! New games implement both traits; searches and strategies only ever
//! talk to these two interfaces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::Result;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Negamax score of this result from `player`'s point of view.
    #[must_use]
    pub fn score_for(&self, player: Player) -> i8 {
        match self {
            GameResult::Winner(p) if *p == player => 1,
            GameResult::Winner(_) => -1,
            GameResult::Draw => 0,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "tie"),
        }
    }
}

/// An immutable snapshot of one position plus whose turn it is.
///
/// ## Implementation Notes
///
/// - `legal_moves` must enumerate in a fixed, reproducible order
/// - `apply_move` never mutates `self`; it returns a fresh state
/// - `apply_move` fails with `Error::IllegalMove` for anything not legal
pub trait GameState: Clone + fmt::Debug + fmt::Display {
    /// A single move in this game.
    type Move: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// The side to move.
    fn current_player(&self) -> Player;

    /// Every legal move, in enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move, producing the successor state.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Check whether a move is legal here.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.legal_moves().contains(mv)
    }
}

/// Move type of a game.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// Rules engine trait.
///
/// Owns the "current state" handle used by drivers. Every rule query takes
/// the state explicitly, so searches can probe hypothetical positions
/// without touching the handle.
pub trait Game {
    /// Position type of this game.
    type State: GameState;

    /// Human-readable rules.
    fn instructions(&self) -> &str;

    /// The position the game is currently in.
    fn current_state(&self) -> &Self::State;

    /// Replace the current position.
    fn set_current_state(&mut self, state: Self::State);

    /// Check if `state` ends the game.
    fn is_over(&self, state: &Self::State) -> bool;

    /// Check if `player` has won in `state`.
    fn is_winner(&self, state: &Self::State, player: Player) -> bool;

    /// Parse driver-supplied move text.
    ///
    /// Returns `None` when the text names nothing in this game. The move may
    /// still be illegal in the current state.
    fn parse_move(&self, text: &str) -> Option<MoveOf<Self>>;

    // === Convenience Methods ===

    /// Final result of `state`, or `None` while play continues.
    fn outcome(&self, state: &Self::State) -> Option<GameResult> {
        if !self.is_over(state) {
            return None;
        }

        let mover = state.current_player();
        if self.is_winner(state, mover) {
            Some(GameResult::Winner(mover))
        } else if self.is_winner(state, mover.other()) {
            Some(GameResult::Winner(mover.other()))
        } else {
            Some(GameResult::Draw)
        }
    }

    /// Check if `player` has won the current position.
    fn is_current_winner(&self, player: Player) -> bool {
        self.is_winner(self.current_state(), player)
    }

    /// Apply a move to the current position.
    fn play(&mut self, mv: &MoveOf<Self>) -> Result<()> {
        let next = self.current_state().apply_move(mv)?;
        self.set_current_state(next);
        Ok(())
    }

    /// Check if some move from `state` wins on the spot for its mover.
    fn wins_immediately(&self, state: &Self::State) -> bool {
        let mover = state.current_player();
        state
            .legal_moves()
            .iter()
            .filter_map(|mv| state.apply_move(mv).ok())
            .any(|child| self.is_winner(&child, mover))
    }

    /// Check if every move from `state` lets the opponent win on the spot.
    ///
    /// False when there are no moves at all.
    fn loses_immediately(&self, state: &Self::State) -> bool {
        let moves = state.legal_moves();
        !moves.is_empty()
            && moves
                .iter()
                .filter_map(|mv| state.apply_move(mv).ok())
                .all(|child| self.wins_immediately(&child))
    }

    /// Cheap outcome estimate in `[-1, 1]` for the side to move.
    ///
    /// Exact for finished games. Otherwise looks at immediate replies only:
    /// `1.0` when some move wins on the spot, `-1.0` when every move lets the
    /// opponent win on the spot, `0.0` when neither holds.
    fn rough_outcome(&self, state: &Self::State) -> f64 {
        if let Some(result) = self.outcome(state) {
            return f64::from(result.score_for(state.current_player()));
        }

        if self.wins_immediately(state) {
            1.0
        } else if self.loses_immediately(state) {
            -1.0
        } else {
            0.0
        }
    }
}
