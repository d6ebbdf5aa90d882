//! Moves and move rejection.
//!
//! A move is a domain event: once appended to the log it is never edited,
//! only replayed.

use super::{Position, Symbol};
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A symbol placed at a position, one per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, new)]
pub struct Move {
    /// Where the symbol was placed.
    pub position: Position,
    /// The symbol placed.
    pub symbol: Symbol,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position)
    }
}

/// Why a square selection was rejected.
///
/// Rejection leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has already been won or drawn.
    #[display("The round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
