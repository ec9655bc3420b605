//! Stonehenge: claim cells on a triangular board to capture ley-lines.
//!
//! - Each move claims one unclaimed cell
//! - Owning at least half of a ley-line's cells captures it, permanently
//! - Capturing at least half of all ley-lines wins
//!
//! Board sizes 1 through 5 are supported.

mod board;
mod game;
mod state;

pub use board::{cell_count, ley_line_count, ley_lines_for, Axis, Board, CellId, LeyLine, MAX_SIDE};
pub use game::{StonehengeConfig, StonehengeGame};
pub use state::{Claim, StonehengeState};
