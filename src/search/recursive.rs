//! Depth-first recursive negamax.

use std::time::Instant;

use tracing::debug;

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::{pick_lowest, terminal_score, Negamax, Score};
use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};

/// Recursive negamax search context.
///
/// Recursion depth equals the longest line of play from the searched
/// position; `SearchConfig::max_depth` turns anything deeper into
/// `Error::DepthLimitExceeded`.
#[derive(Clone, Debug, Default)]
pub struct RecursiveNegamax {
    config: SearchConfig,
    stats: SearchStats,
}

impl RecursiveNegamax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn negamax<G: Game>(&mut self, game: &G, state: &G::State, depth: u32) -> Result<Score> {
        if self.config.depth_exceeded(depth) {
            return Err(Error::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }

        if let Some(score) = terminal_score(game, state) {
            self.stats.visit(depth, true);
            return Ok(score);
        }
        self.stats.visit(depth, false);

        let mut best: Option<Score> = None;
        for mv in state.legal_moves() {
            let child = state.apply_move(&mv)?;
            let score = -self.negamax(game, &child, depth + 1)?;
            best = Some(best.map_or(score, |b| b.max(score)));
        }

        best.ok_or(Error::NoLegalMoves)
    }

    fn finish(&mut self, start: Instant, what: &str) {
        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            expanded = self.stats.nodes_expanded,
            terminal = self.stats.terminal_nodes,
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "recursive {} finished",
            what
        );
    }
}

impl Negamax for RecursiveNegamax {
    fn evaluate<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Score> {
        let start = Instant::now();
        self.stats.reset();

        let score = self.negamax(game, state, 0);
        self.finish(start, "evaluation");
        score
    }

    fn best_move_from<G: Game>(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>> {
        let start = Instant::now();
        self.stats.reset();

        if game.is_over(state) {
            return Err(Error::NoLegalMoves);
        }
        self.stats.visit(0, false);

        let mut scored = Vec::new();
        for mv in state.legal_moves() {
            let child = state.apply_move(&mv)?;
            let score = self.negamax(game, &child, 1)?;
            scored.push((mv, score));
        }

        let best = pick_lowest(scored);
        self.finish(start, "search");
        best
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::{SubtractSquareGame, SubtractSquareState};

    fn search() -> RecursiveNegamax {
        RecursiveNegamax::new(SearchConfig::default())
    }

    #[test]
    fn test_evaluate_subtract_square() {
        let game = SubtractSquareGame::new(0, Player::One);
        let mut search = search();

        // Losing pile sizes for the side to move: 0, 2, 5, 7, 10.
        let expected = [-1, 1, -1, 1, 1, -1, 1, -1, 1, 1, -1];
        for (value, &score) in expected.iter().enumerate() {
            let state = SubtractSquareState::new(value as u32, Player::One);
            assert_eq!(search.evaluate(&game, &state).unwrap(), score, "value {}", value);
        }
    }

    #[test]
    fn test_best_move_wins_immediately() {
        let game = SubtractSquareGame::new(4, Player::One);
        assert_eq!(search().best_move(&game).unwrap(), 4);
    }

    #[test]
    fn test_best_move_leaves_losing_pile() {
        // From 6: taking 1 leaves 5, which loses for the opponent.
        let game = SubtractSquareGame::new(6, Player::Two);
        assert_eq!(search().best_move(&game).unwrap(), 1);
    }

    #[test]
    fn test_best_move_first_on_ties() {
        // From 5 every move loses, so the first move is returned.
        let game = SubtractSquareGame::new(5, Player::One);
        assert_eq!(search().best_move(&game).unwrap(), 1);
    }

    #[test]
    fn test_best_move_on_finished_game() {
        let game = SubtractSquareGame::new(0, Player::One);
        assert!(matches!(search().best_move(&game), Err(Error::NoLegalMoves)));
    }

    #[test]
    fn test_depth_limit() {
        let game = SubtractSquareGame::new(12, Player::One);
        let mut search = RecursiveNegamax::new(SearchConfig::default().with_max_depth(3));

        assert!(matches!(
            search.best_move(&game),
            Err(Error::DepthLimitExceeded { limit: 3 })
        ));
    }

    #[test]
    fn test_stats_recorded() {
        let game = SubtractSquareGame::new(3, Player::One);
        let mut search = search();
        search.best_move(&game).unwrap();

        // 3 -> 2 -> 1 -> 0: one line of play, three internal positions.
        assert_eq!(search.stats().nodes_expanded, 3);
        assert_eq!(search.stats().terminal_nodes, 1);
        assert_eq!(search.stats().max_depth, 3);
    }

    #[test]
    fn test_current_state_untouched() {
        let game = SubtractSquareGame::new(9, Player::One);
        search().best_move(&game).unwrap();
        assert_eq!(game.current_state(), &SubtractSquareState::new(9, Player::One));
    }
}
