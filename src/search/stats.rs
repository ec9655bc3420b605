//! Search statistics for diagnostics and comparison.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Non-terminal positions whose children were generated.
    pub nodes_expanded: u64,

    /// Terminal positions scored directly.
    pub terminal_nodes: u64,

    /// Deepest ply reached (root = 0).
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total positions visited.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_expanded + self.terminal_nodes
    }

    /// Record a visit at `depth`.
    pub(crate) fn visit(&mut self, depth: u32, terminal: bool) {
        if terminal {
            self.terminal_nodes += 1;
        } else {
            self.nodes_expanded += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate positions per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited() as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Same counts, ignoring timing.
    #[must_use]
    pub fn same_shape(&self, other: &SearchStats) -> bool {
        self.nodes_expanded == other.nodes_expanded
            && self.terminal_nodes == other.terminal_nodes
            && self.max_depth == other.max_depth
    }
}
