//! Stonehenge positions.
//!
//! A state is an immutable value: board geometry (shared), cell claims,
//! ley-line claims and the side to move. `apply_move` builds a new value
//! and leaves the old one untouched. Cell and line vectors are `im`
//! persistent vectors, so a child state shares most of its storage with its
//! parent.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Axis, Board, CellId};
use crate::core::{Player, PlayerMap};
use crate::error::{Error, Result};
use crate::rules::GameState;

/// Ownership of a cell or a ley-line.
///
/// Only ever moves forward from `Unclaimed` to `Owned`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Claim {
    #[default]
    Unclaimed,
    Owned(Player),
}

impl Claim {
    #[must_use]
    pub fn is_unclaimed(self) -> bool {
        self == Claim::Unclaimed
    }

    #[must_use]
    pub fn owner(self) -> Option<Player> {
        match self {
            Claim::Unclaimed => None,
            Claim::Owned(p) => Some(p),
        }
    }
}

/// One Stonehenge position.
#[derive(Clone)]
pub struct StonehengeState {
    board: Arc<Board>,
    cells: Vector<Claim>,
    lines: Vector<Claim>,
    captured: PlayerMap<usize>,
    to_move: Player,
}

impl StonehengeState {
    /// Fresh position with every cell and line unclaimed.
    pub fn new(board: Arc<Board>, first: Player) -> Self {
        let cells = std::iter::repeat(Claim::Unclaimed)
            .take(board.cell_count())
            .collect();
        let lines = std::iter::repeat(Claim::Unclaimed)
            .take(board.lines().len())
            .collect();

        Self {
            board,
            cells,
            lines,
            captured: PlayerMap::with_value(0),
            to_move: first,
        }
    }

    /// Shared board geometry.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Claim on a cell.
    #[must_use]
    pub fn cell(&self, cell: CellId) -> Claim {
        self.cells.get(cell.index()).copied().unwrap_or_default()
    }

    /// Claim on a ley-line, by line index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Claim {
        self.lines.get(idx).copied().unwrap_or_default()
    }

    /// Claims on every ley-line, in board line order.
    pub fn line_claims(&self) -> impl Iterator<Item = Claim> + '_ {
        self.lines.iter().copied()
    }

    /// Number of ley-lines a player has captured.
    #[must_use]
    pub fn captured(&self, player: Player) -> usize {
        self.captured[player]
    }

    /// Lines needed to win: at least half of all lines.
    #[must_use]
    pub fn lines_to_win(&self) -> usize {
        self.lines.len().div_ceil(2)
    }

    /// Check if either player holds enough ley-lines to end the game.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        let needed = self.lines_to_win();
        Player::ALL.iter().any(|&p| self.captured[p] >= needed)
    }

    /// Labels of cells still shown as letters, in board order.
    #[must_use]
    pub fn cell_labels(&self) -> Vec<char> {
        self.board
            .cells()
            .filter(|&c| self.cell(c).is_unclaimed())
            .map(CellId::label)
            .collect()
    }

    /// Number of cells of `line` owned by `player`.
    fn owned_in_line(&self, line: usize, player: Player) -> usize {
        self.board
            .line(line)
            .cells
            .iter()
            .filter(|&&c| self.cell(c) == Claim::Owned(player))
            .count()
    }

    fn marker(claim: Claim, unclaimed: char) -> char {
        claim.owner().map_or(unclaimed, Player::marker)
    }
}

impl GameState for StonehengeState {
    type Move = CellId;

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<CellId> {
        self.board
            .cells()
            .filter(|&c| self.cell(c).is_unclaimed())
            .collect()
    }

    fn is_legal(&self, mv: &CellId) -> bool {
        self.board.contains(*mv) && self.cell(*mv).is_unclaimed()
    }

    fn apply_move(&self, mv: &CellId) -> Result<Self> {
        if !self.is_legal(mv) {
            return Err(Error::illegal(mv));
        }

        let mover = self.to_move;
        let mut next = self.clone();
        next.cells.set(mv.index(), Claim::Owned(mover));

        // Only lines through the claimed cell can change hands, and captured
        // lines never do.
        for line in self.board.lines_through(*mv) {
            if !next.line(line).is_unclaimed() {
                continue;
            }
            if next.owned_in_line(line, mover) >= self.board.line(line).threshold() {
                next.lines.set(line, Claim::Owned(mover));
                next.captured[mover] += 1;
            }
        }

        next.to_move = mover.other();
        Ok(next)
    }
}

impl fmt::Debug for StonehengeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: String = self
            .board
            .cells()
            .map(|c| Self::marker(self.cell(c), '.'))
            .collect();
        let lines: String = self.lines.iter().map(|&l| Self::marker(l, '@')).collect();

        f.debug_struct("StonehengeState")
            .field("side", &self.board.side())
            .field("cells", &cells)
            .field("lines", &lines)
            .field("to_move", &self.to_move)
            .finish()
    }
}

impl fmt::Display for StonehengeState {
    /// Draws the board row by row. Unclaimed cells show their letter and
    /// claimed cells show their owner. Each row starts with its ley-line
    /// marker (`@` while unclaimed); the diagonal markers follow below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.board.side();

        for row in 0..=n {
            let cells: Vec<CellId> = self.board.row(row).collect();
            let first_col = self.board.coords(cells[0]).1;
            // Column 4c - 2r keeps each cell between its two upper neighbours.
            let indent = 4 * first_col + 2 * n - 2 * row;

            let mut text = String::new();
            text.push_str(&" ".repeat(indent));
            text.push(Self::marker(self.lines[row], '@'));
            for cell in cells {
                write!(text, " - {}", Self::marker(self.cell(cell), cell.label()))?;
            }
            writeln!(f, "{}", text.trim_end())?;
        }

        for (axis, symbol) in [(Axis::LowerLeft, '/'), (Axis::LowerRight, '\\')] {
            let markers: Vec<String> = self
                .board
                .axis_lines(axis)
                .map(|(idx, _)| Self::marker(self.lines[idx], '@').to_string())
                .collect();
            writeln!(f, "{} : {}", symbol, markers.join(" "))?;
        }

        write!(f, "to move: {}", self.to_move)
    }
}
