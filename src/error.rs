//! Crate-wide error type.

use thiserror::Error;

/// Errors raised by game rules, searches, and the session driver.
#[derive(Debug, Error)]
pub enum Error {
    /// The move does not name a currently unclaimed cell (or legal option).
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    /// A search was asked to pick a move from a position with none.
    #[error("no legal moves available from this state")]
    NoLegalMoves,

    /// Move text does not identify anything on the board.
    #[error("malformed move text: {text:?}")]
    MalformedMove { text: String },

    /// Strategy code that names no known strategy.
    #[error("unknown strategy code: {code:?}")]
    UnknownStrategy { code: String },

    /// Board side length outside the supported range.
    #[error("unsupported side length {side} (expected 1..=5)")]
    InvalidSideLength { side: usize },

    /// Recursive search went deeper than the configured guard.
    #[error("search depth exceeded limit of {limit}")]
    DepthLimitExceeded { limit: u32 },

    /// Iterative search allocated more nodes than allowed.
    #[error("search tree exceeded limit of {limit} nodes")]
    NodeLimitExceeded { limit: usize },

    /// Interactive input reached end of stream.
    #[error("input closed before a move was entered")]
    InputClosed,

    /// A session exceeded its configured turn budget.
    #[error("session exceeded limit of {limit} turns")]
    TurnLimitExceeded { limit: u32 },

    /// A strategy kept producing unusable moves.
    #[error("{player} gave {attempts} invalid moves in a row")]
    TooManyInvalidMoves { player: crate::core::Player, attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `IllegalMove` from anything displayable.
    pub fn illegal(mv: impl std::fmt::Display) -> Self {
        Error::IllegalMove { mv: mv.to_string() }
    }
}
