//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The tree is
//! scratch data owned by a single search call.

use super::node::{NodeId, SearchNode};
use crate::rules::GameState;

/// Arena-based search tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a child under `parent`, keeping child order.
    pub fn add_child(&mut self, parent: NodeId, state: S, mv: S::Move) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let child = self.alloc(SearchNode::new(state, Some(mv), depth));
        self.get_mut(parent).children.push(child);
        child
    }

    /// Drop every node below `id`, leaving it a leaf.
    ///
    /// Only valid while `id`'s descendants form the tail of the arena, which
    /// holds for a node whose post-order evaluation has just finished.
    pub fn prune_below(&mut self, id: NodeId) {
        let node = self.get_mut(id);
        if let Some(&first) = node.children.first() {
            debug_assert!(first.raw() > id.raw());
            node.children.clear();
            self.nodes.truncate(first.0 as usize);
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root)
    }

    /// Children of a node, in legal-move order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode<S>> {
        self.get(id).children.iter().map(move |&c| self.get(c))
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.children.is_empty()).count();
        let scored_count = self.nodes.iter().filter(|n| n.is_scored()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            leaf_count,
            scored_count,
        }
    }
}

/// Statistics about a search tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Nodes with a known score.
    pub scored_count: usize,
}
