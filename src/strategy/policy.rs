//! Concrete move-choosing strategies.
//!
//! - Searches: `RecursiveNegamax`, `IterativeNegamax` (exact play)
//! - `RoughOutcome`: one look at each reply, scored by `Game::rough_outcome`
//! - `RandomMove`: uniform over legal moves, seeded
//! - `Interactive`: asks a human through any reader/writer pair

use std::io::{BufRead, Write};

use tracing::debug;

use super::Strategy;
use crate::core::GameRng;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};
use crate::search::{IterativeNegamax, Negamax, RecursiveNegamax};

// =============================================================================
// Exhaustive Search
// =============================================================================

impl<G: Game> Strategy<G> for RecursiveNegamax {
    fn name(&self) -> &str {
        "recursive minimax"
    }

    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        self.best_move(game).map(Some)
    }
}

impl<G: Game> Strategy<G> for IterativeNegamax {
    fn name(&self) -> &str {
        "iterative minimax"
    }

    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        self.best_move(game).map(Some)
    }
}

// =============================================================================
// Heuristic
// =============================================================================

/// Pick the move whose resulting position looks worst for the opponent.
///
/// Same sign convention as the searches: each child's `rough_outcome` is
/// from the opponent's side, so the lowest one wins. First move on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcome;

impl<G: Game> Strategy<G> for RoughOutcome {
    fn name(&self) -> &str {
        "rough outcome"
    }

    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        let state = game.current_state();
        if game.is_over(state) {
            return Err(Error::NoLegalMoves);
        }

        let mut best: Option<(MoveOf<G>, f64)> = None;
        for mv in state.legal_moves() {
            let guess = -game.rough_outcome(&state.apply_move(&mv)?);
            match best {
                Some((_, current)) if guess <= current => {}
                _ => best = Some((mv, guess)),
            }
        }

        let (mv, guess) = best.ok_or(Error::NoLegalMoves)?;
        debug!(%mv, guess, "rough outcome pick");
        Ok(Some(mv))
    }
}

// =============================================================================
// Random
// =============================================================================

/// Uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: GameRng,
}

impl RandomMove {
    /// Create a random player from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player from an existing RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<G: Game> Strategy<G> for RandomMove {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        let moves = game.current_state().legal_moves();
        self.rng
            .choose(&moves)
            .cloned()
            .map(Some)
            .ok_or(Error::NoLegalMoves)
    }
}

// =============================================================================
// Interactive
// =============================================================================

/// Prompt a human for move text.
///
/// Unparseable text comes back as `Ok(None)`; retrying is up to the caller.
#[derive(Debug)]
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    /// Read moves from `input`, prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Interactive<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on stdout, read from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<G: Game, R: BufRead, W: Write> Strategy<G> for Interactive<R, W> {
    fn name(&self) -> &str {
        "interactive"
    }

    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        write!(self.output, "Enter a move: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        Ok(game.parse_move(line.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::{StonehengeGame, SubtractSquareGame};
    use crate::games::stonehenge::CellId;
    use crate::search::SearchConfig;

    #[test]
    fn test_rough_outcome_takes_win() {
        let game = SubtractSquareGame::new(4, Player::One);
        let mv = RoughOutcome.choose_move(&game).unwrap();
        assert_eq!(mv, Some(4));
    }

    #[test]
    fn test_rough_outcome_finished_game() {
        let game = SubtractSquareGame::new(0, Player::One);
        let result: Result<Option<u32>> = RoughOutcome.choose_move(&game);
        assert!(matches!(result, Err(Error::NoLegalMoves)));
    }

    #[test]
    fn test_search_strategies_agree() {
        let game = StonehengeGame::with_side(2).unwrap();

        let mut recursive = RecursiveNegamax::new(SearchConfig::default());
        let mut iterative = IterativeNegamax::new(SearchConfig::default());

        let a: Option<CellId> = recursive.choose_move(&game).unwrap();
        let b: Option<CellId> = iterative.choose_move(&game).unwrap();
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_is_legal_and_seeded() {
        let game = StonehengeGame::with_side(3).unwrap();
        let legal = game.current_state().legal_moves();

        let a = RandomMove::new(5).choose_move(&game).unwrap().unwrap();
        let b = RandomMove::new(5).choose_move(&game).unwrap().unwrap();

        assert!(legal.contains(&a));
        assert_eq!(a, b);
    }

    #[test]
    fn test_interactive_parses_line() {
        let game = StonehengeGame::with_side(2).unwrap();
        let mut player = Interactive::new("c\n".as_bytes(), Vec::new());

        let mv = player.choose_move(&game).unwrap();
        assert_eq!(mv, Some(CellId(2)));

        let (_, output) = player.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Enter a move: ");
    }

    #[test]
    fn test_interactive_bad_text_is_sentinel() {
        let game = StonehengeGame::with_side(2).unwrap();
        let mut player = Interactive::new("zz\n".as_bytes(), Vec::new());

        assert_eq!(player.choose_move(&game).unwrap(), None);
    }

    #[test]
    fn test_interactive_eof() {
        let game = SubtractSquareGame::new(5, Player::One);
        let mut player = Interactive::new("".as_bytes(), Vec::new());

        let result: Result<Option<u32>> = player.choose_move(&game);
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
