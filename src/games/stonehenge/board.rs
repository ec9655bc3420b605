//! Stonehenge board geometry.
//!
//! ## Layout
//!
//! A board of side length `n` has `n + 1` rows. Rows `0..n` hold `r + 2`
//! cells; the last row holds `n` cells and sits tucked under the row above
//! it. In triangle coordinates `(row, col)`:
//!
//! - top rows use `col = 0..=row + 1`
//! - the last row uses `col = 1..=n`
//!
//! Moving down-left keeps `col`; moving down-right keeps `col - row`. That
//! gives three families of `n + 1` ley-lines each:
//!
//! - horizontal: constant `row`
//! - lower-left diagonal (`/`): constant `col`, `0..=n`
//! - lower-right diagonal (`\`): constant `col - row`, `1` down to `1 - n`
//!
//! For `n = 2`:
//!
//! ```text
//!       A - B
//!      / \ / \
//!     C - D - E
//!      \ / \ /
//!       F - G
//! ```
//!
//! Rows `{A,B} {C,D,E} {F,G}`, `/` lines `{A,C} {B,D,F} {E,G}`, `\` lines
//! `{B,E} {A,D,G} {C,F}`.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Largest supported side length (25 cells labelled `A..=Y`).
pub const MAX_SIDE: usize = 5;

/// Number of cells on a board of side length `n`.
#[must_use]
pub const fn cell_count(n: usize) -> usize {
    (n * n + 5 * n) / 2
}

/// Number of ley-lines on a board of side length `n`.
#[must_use]
pub const fn ley_line_count(n: usize) -> usize {
    3 * (n + 1)
}

/// Identity of one cell, fixed at board construction.
///
/// Cells are numbered in row-major order and shown as letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter shown for this cell.
    #[must_use]
    pub fn label(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CellId {
    type Err = Error;

    /// Parse a single cell letter, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedMove { text: s.to_string() };
        let mut chars = s.trim().chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                let idx = c.to_ascii_uppercase() as u8 - b'A';
                if (idx as usize) < cell_count(MAX_SIDE) {
                    Ok(CellId(idx))
                } else {
                    Err(malformed())
                }
            }
            _ => Err(malformed()),
        }
    }
}

/// The three directions ley-lines run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Down and to the left (`/`).
    LowerLeft,
    /// Down and to the right (`\`).
    LowerRight,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Horizontal, Axis::LowerLeft, Axis::LowerRight];

    /// Position of this axis in per-cell line triples.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::LowerLeft => 1,
            Axis::LowerRight => 2,
        }
    }
}

/// A fixed group of cells along one axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeyLine {
    /// Direction of the line.
    pub axis: Axis,

    /// Member cells, in board order.
    pub cells: SmallVec<[CellId; 6]>,
}

impl LeyLine {
    /// Number of member cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells a player must own to capture the line (at least half).
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.len().div_ceil(2)
    }

    /// Check if a cell belongs to this line.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }
}

/// Triangle coordinates `(row, col)` of every cell, in row-major order.
fn cell_coords(n: usize) -> Vec<(usize, usize)> {
    let mut coords = Vec::with_capacity(cell_count(n));
    for row in 0..n {
        for col in 0..=row + 1 {
            coords.push((row, col));
        }
    }
    for col in 1..=n {
        coords.push((n, col));
    }
    coords
}

/// Line index for each axis of the cell at `(row, col)`.
fn line_slots(n: usize, row: usize, col: usize) -> [usize; 3] {
    let per_axis = n + 1;
    [row, per_axis + col, 2 * per_axis + (1 + row - col)]
}

/// Derive the ley-lines of a board with side length `n`.
///
/// Lines come out horizontal first (top to bottom), then `/` (left to
/// right), then `\` (top-right to bottom-left).
pub fn ley_lines_for(n: usize) -> Result<Vec<LeyLine>> {
    if n == 0 || n > MAX_SIDE {
        return Err(Error::InvalidSideLength { side: n });
    }

    let mut lines: Vec<LeyLine> = (0..ley_line_count(n))
        .map(|i| LeyLine {
            axis: Axis::ALL[i / (n + 1)],
            cells: SmallVec::new(),
        })
        .collect();

    for (id, (row, col)) in cell_coords(n).into_iter().enumerate() {
        for slot in line_slots(n, row, col) {
            lines[slot].cells.push(CellId(id as u8));
        }
    }

    Ok(lines)
}

/// Immutable board geometry for one side length.
///
/// Built once per game and shared by every state derived from it.
#[derive(Clone, Debug)]
pub struct Board {
    side: usize,
    coords: Vec<(usize, usize)>,
    lines: Vec<LeyLine>,
    /// Per cell: the horizontal, `/` and `\` line indices.
    lines_through: Vec<[usize; 3]>,
    by_label: FxHashMap<char, CellId>,
}

impl Board {
    /// Build the board for side length `side` (1..=5).
    pub fn new(side: usize) -> Result<Self> {
        let lines = ley_lines_for(side)?;
        let coords = cell_coords(side);

        let lines_through = coords
            .iter()
            .map(|&(row, col)| line_slots(side, row, col))
            .collect();

        let by_label = (0..coords.len())
            .map(|i| {
                let cell = CellId(i as u8);
                (cell.label(), cell)
            })
            .collect();

        Ok(Self {
            side,
            coords,
            lines,
            lines_through,
            by_label,
        })
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.coords.len()
    }

    /// All cells in construction order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        (0..self.coords.len() as u8).map(CellId)
    }

    #[must_use]
    pub fn lines(&self) -> &[LeyLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, idx: usize) -> &LeyLine {
        &self.lines[idx]
    }

    /// Indices of the three lines a cell belongs to.
    #[must_use]
    pub fn lines_through(&self, cell: CellId) -> [usize; 3] {
        self.lines_through[cell.index()]
    }

    /// Triangle coordinates of a cell.
    #[must_use]
    pub fn coords(&self, cell: CellId) -> (usize, usize) {
        self.coords[cell.index()]
    }

    /// Check if a cell exists on this board.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.index() < self.coords.len()
    }

    /// Look a cell up by its letter (case-insensitive).
    #[must_use]
    pub fn cell_by_label(&self, label: char) -> Option<CellId> {
        self.by_label.get(&label.to_ascii_uppercase()).copied()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = CellId> + '_ {
        self.lines[row].cells.iter().copied()
    }

    /// Lines along one axis, in board order.
    pub fn axis_lines(&self, axis: Axis) -> impl Iterator<Item = (usize, &LeyLine)> {
        self.lines
            .iter()
            .enumerate()
            .filter(move |(_, line)| line.axis == axis)
    }
}
