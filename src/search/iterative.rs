//! Negamax over an explicit tree and work stack.
//!
//! Post-order evaluation without native recursion:
//!
//! 1. Push the root.
//! 2. Pop a node. Terminal nodes get their score and are done.
//! 3. An unexpanded node is pushed back, then one child per legal move is
//!    created and pushed on top of it.
//! 4. An expanded node is only popped again once every child above it on the
//!    stack has been resolved, so its score is `max(-child)`.
//!
//! Every node is popped at most twice and scored exactly once.
//!
//! When a node other than the root is scored, everything allocated after its
//! children is part of its subtree, so the arena is truncated back to it.
//! Live nodes are then bounded by depth times branching factor rather than
//! by the size of the whole game tree. The root keeps its scored children
//! for move selection. `SearchConfig::retain_tree` turns pruning off.

use std::time::Instant;

use tracing::{debug, trace};

use super::config::SearchConfig;
use super::node::NodeId;
use super::stats::SearchStats;
use super::tree::SearchTree;
use super::{pick_lowest, terminal_score, Negamax, Score};
use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};

/// Iterative negamax search context.
///
/// Each call builds its own `SearchTree` arena and drops it on return.
#[derive(Clone, Debug, Default)]
pub struct IterativeNegamax {
    config: SearchConfig,
    stats: SearchStats,
}

impl IterativeNegamax {
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

    /// Score the game tree below `state`.
    ///
    /// The returned tree holds the root and its scored children, or every
    /// node when `retain_tree` is set.
    pub fn solve<G: Game>(&mut self, game: &G, state: &G::State) -> Result<SearchTree<G::State>> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = SearchTree::with_capacity(state.clone(), self.config.initial_capacity);
        let root = tree.root();
        let mut stack: Vec<NodeId> = vec![root];
        let mut peak = tree.len();

        while let Some(id) = stack.pop() {
            let node = tree.get(id);
            let depth = node.depth;

            if let Some(score) = terminal_score(game, &node.state) {
                tree.get_mut(id).score = Some(score);
                self.stats.visit(depth, true);
                continue;
            }

            if !node.expanded {
                let moves = node.state.legal_moves();
                if moves.is_empty() {
                    return Err(Error::NoLegalMoves);
                }

                // Revisit marker: the parent sits below its children.
                stack.push(id);
                for mv in moves {
                    let child_state = tree.get(id).state.apply_move(&mv)?;
                    let child = tree.add_child(id, child_state, mv);
                    stack.push(child);
                }
                tree.get_mut(id).expanded = true;
                self.stats.visit(depth, false);
                peak = peak.max(tree.len());

                if self.config.nodes_exceeded(tree.len()) {
                    return Err(Error::NodeLimitExceeded {
                        limit: self.config.max_nodes,
                    });
                }
                trace!(node = %id, depth, children = tree.get(id).children.len(), "expanded");
            } else {
                let score = aggregate(&tree, id);
                tree.get_mut(id).score = score;
                if id != root && !self.config.retain_tree {
                    tree.prune_below(id);
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            peak_nodes = peak,
            expanded = self.stats.nodes_expanded,
            terminal = self.stats.terminal_nodes,
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "iterative search finished"
        );
        Ok(tree)
    }
}

/// `max(-child)` over the children of an expanded node.
fn aggregate<S: GameState>(tree: &SearchTree<S>, id: NodeId) -> Option<Score> {
    debug_assert!(tree.children(id).all(|child| child.is_scored()));
    tree.children(id)
        .filter_map(|child| child.score)
        .map(|score| -score)
        .max()
}

impl Negamax for IterativeNegamax {
    fn evaluate<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Score> {
        let tree = self.solve(game, state)?;
        tree.root_node().score.ok_or(Error::NoLegalMoves)
    }

    fn best_move_from<G: Game>(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>> {
        if game.is_over(state) {
            return Err(Error::NoLegalMoves);
        }

        let tree = self.solve(game, state)?;
        let scored = tree
            .children(tree.root())
            .filter_map(|child| Some((child.mv.clone()?, child.score?)));
        pick_lowest(scored)
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

    fn search() -> IterativeNegamax {
        IterativeNegamax::new(SearchConfig::default())
    }

    fn retaining() -> IterativeNegamax {
        IterativeNegamax::new(SearchConfig::default().with_retain_tree(true))
    }

    #[test]
    fn test_evaluate_subtract_square() {
        let game = SubtractSquareGame::new(0, Player::One);
        let mut search = search();

        let expected = [-1, 1, -1, 1, 1, -1, 1, -1, 1, 1, -1];
        for (value, &score) in expected.iter().enumerate() {
            let state = SubtractSquareState::new(value as u32, Player::Two);
            assert_eq!(search.evaluate(&game, &state).unwrap(), score, "value {}", value);
        }
    }

    #[test]
    fn test_every_node_scored() {
        let game = SubtractSquareGame::new(0, Player::One);
        let tree = retaining()
            .solve(&game, &SubtractSquareState::new(9, Player::One))
            .unwrap();

        let stats = tree.stats();
        assert_eq!(stats.scored_count, stats.node_count);
    }

    #[test]
    fn test_internal_scores_are_negamax() {
        let game = SubtractSquareGame::new(0, Player::One);
        let tree = retaining()
            .solve(&game, &SubtractSquareState::new(8, Player::One))
            .unwrap();

        for (id, node) in tree.iter() {
            if node.children.is_empty() {
                continue;
            }
            let expected = tree.children(id).filter_map(|c| c.score).map(|s| -s).max();
            assert_eq!(node.score, expected);
        }
    }

    #[test]
    fn test_best_move() {
        let game = SubtractSquareGame::new(6, Player::One);
        assert_eq!(search().best_move(&game).unwrap(), 1);

        let game = SubtractSquareGame::new(4, Player::One);
        assert_eq!(search().best_move(&game).unwrap(), 4);
    }

    #[test]
    fn test_best_move_on_finished_game() {
        let game = SubtractSquareGame::new(0, Player::Two);
        assert!(matches!(search().best_move(&game), Err(Error::NoLegalMoves)));
    }

    #[test]
    fn test_node_limit() {
        let game = SubtractSquareGame::new(20, Player::One);
        let mut search = IterativeNegamax::new(SearchConfig::default().with_max_nodes(10));

        assert!(matches!(
            search.best_move(&game),
            Err(Error::NodeLimitExceeded { limit: 10 })
        ));
    }

    #[test]
    fn test_deep_tree_without_recursion() {
        // Subtracting 1 at a time gives a line of play 25 plies long.
        let game = SubtractSquareGame::new(25, Player::One);
        let mut search = IterativeNegamax::new(SearchConfig::default().with_max_depth(1));

        search.best_move(&game).unwrap();
        assert_eq!(search.stats().max_depth, 25);
    }

    #[test]
    fn test_scored_subtrees_are_dropped() {
        let game = SubtractSquareGame::new(0, Player::One);
        let state = SubtractSquareState::new(9, Player::One);

        let pruned = search().solve(&game, &state).unwrap();
        let full = retaining().solve(&game, &state).unwrap();

        // Root plus one child per legal move: 9 - 1, 9 - 4, 9 - 9.
        assert_eq!(pruned.len(), 4);
        assert!(full.len() > pruned.len());
        assert!(pruned.children(pruned.root()).all(|c| c.children.is_empty()));

        let a: Vec<_> = pruned.children(pruned.root()).map(|c| (c.mv, c.score)).collect();
        let b: Vec<_> = full.children(full.root()).map(|c| (c.mv, c.score)).collect();
        assert_eq!(a, b);
        assert_eq!(pruned.root_node().score, full.root_node().score);
    }

    #[test]
    fn test_arena_bounded_by_depth_and_width() {
        // The full tree below 25 has far more than 200 nodes; the live arena
        // never holds more than 25 plies of at most 5 children.
        let game = SubtractSquareGame::new(25, Player::One);
        let mut bounded = IterativeNegamax::new(SearchConfig::default().with_max_nodes(200));
        let mut unbounded = search();

        assert_eq!(
            bounded.best_move(&game).unwrap(),
            unbounded.best_move(&game).unwrap()
        );
        assert!(bounded.stats().nodes_visited() > 200);

        let mut retaining = IterativeNegamax::new(
            SearchConfig::default().with_max_nodes(200).with_retain_tree(true),
        );
        assert!(matches!(
            retaining.best_move(&game),
            Err(Error::NodeLimitExceeded { limit: 200 })
        ));
    }
}
