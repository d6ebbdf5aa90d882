//! Core domain types for tic-tac-toe.

use super::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board, and therefore the longest possible round.
pub const CELL_COUNT: usize = 9;

/// Token a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Symbol X (always moves first).
    X,
    /// Symbol O (moves second).
    O,
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol on this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is always derived from a move log by replay; nothing in the
/// crate keeps one around between queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns the board as three rows of three squares.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [
            [s[0], s[1], s[2]],
            [s[3], s[4], s[5]],
            [s[6], s[7], s[8]],
        ]
    }

    /// Number of squares holding a symbol.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Positions that are still free, in row-major order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(symbol) => write!(f, "{}", symbol)?,
                }
                if c < 2 {
                    write!(f, "|")?;
                }
            }
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Outcome of the current round, derived from the move log.
///
/// Never stored: it goes stale the moment the log changes, so callers
/// re-derive it instead of caching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundResult {
    /// Round still open.
    NoResult,
    /// A symbol completed a line.
    Win {
        /// The winning symbol.
        symbol: Symbol,
        /// Display name registered for the winner at derivation time.
        name: String,
    },
    /// Board filled with no completed line.
    Draw,
}

impl RoundResult {
    /// Returns the winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            RoundResult::Win { symbol, .. } => Some(*symbol),
            RoundResult::NoResult | RoundResult::Draw => None,
        }
    }

    /// Returns the winner's display name, if any.
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            RoundResult::Win { name, .. } => Some(name),
            RoundResult::NoResult | RoundResult::Draw => None,
        }
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundResult::NoResult)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::NoResult => Ok(()),
            RoundResult::Win { name, .. } => write!(f, "{} won!", name),
            RoundResult::Draw => write!(f, "It's a draw!"),
        }
    }
}
