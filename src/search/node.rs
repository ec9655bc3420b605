//! Search tree node structures.
//!
//! Uses arena-based allocation with index references (NodeId), so a whole
//! tree is released in one go when the search that built it returns.

use smallvec::SmallVec;

use super::Score;
use crate::rules::GameState;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the iterative search tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// Position at this node.
    pub state: S,

    /// Move that led here from the parent (None for root).
    pub mv: Option<S::Move>,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Whether the children have been generated.
    pub expanded: bool,

    /// Children in legal-move order.
    /// SmallVec optimizes for typical branching factor < 8.
    pub children: SmallVec<[NodeId; 8]>,

    /// Negamax score for the side to move here, once known.
    pub score: Option<Score>,
}

impl<S: GameState> SearchNode<S> {
    /// Create a new unexpanded node.
    pub fn new(state: S, mv: Option<S::Move>, depth: u32) -> Self {
        Self {
            state,
            mv,
            depth,
            expanded: false,
            children: SmallVec::new(),
            score: None,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0)
    }

    /// Check if this node has been scored.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}
