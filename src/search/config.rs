//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Limits shared by the recursive and iterative searches.
///
/// Both searches are exhaustive; these limits only turn runaway searches
/// into errors instead of stack overflows or memory exhaustion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum recursion depth for the recursive search (0 = unlimited).
    pub max_depth: u32,

    /// Maximum nodes held at once in the iterative search arena
    /// (0 = unlimited).
    pub max_nodes: usize,

    /// Nodes to reserve up front in the iterative search arena.
    pub initial_capacity: usize,

    /// Keep the whole iterative search tree instead of dropping each
    /// subtree once it is scored.
    pub retain_tree: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_nodes: 0,
            initial_capacity: 1024,
            retain_tree: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with custom node limit.
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Create a new config with custom arena capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Create a new config that keeps the full iterative tree.
    pub fn with_retain_tree(mut self, retain: bool) -> Self {
        self.retain_tree = retain;
        self
    }

    /// Check a recursion depth against the limit.
    #[must_use]
    pub fn depth_exceeded(&self, depth: u32) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }

    /// Check an arena size against the limit.
    #[must_use]
    pub fn nodes_exceeded(&self, nodes: usize) -> bool {
        self.max_nodes > 0 && nodes > self.max_nodes
    }
}
