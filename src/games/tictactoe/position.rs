//! Board coordinates for tic-tac-toe moves.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::instrument;

/// Side length of the board.
pub const SIDE: usize = 3;

/// A cell on the tic-tac-toe board, addressed by row and column (each 0-2).
///
/// Out-of-range coordinates are a caller bug: [`Position::new`] panics on
/// them. Untrusted input goes through [`Position::try_new`], and so does
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
pub struct Position {
    /// Row index, top to bottom.
    #[schemars(range(max = 2))]
    row: usize,
    /// Column index, left to right.
    #[schemars(range(max = 2))]
    col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIDE && col < SIDE,
            "position ({row}, {col}) is outside the 3x3 board"
        );
        Self::at(row, col)
    }

    /// Creates a position, or `None` if either coordinate is off the board.
    #[instrument]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then(|| Self::at(row, col))
    }

    /// Converts position to board index (0-8, row-major).
    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

/// Wire shape of a position before the bounds check.
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawPosition { row, col } = RawPosition::deserialize(deserializer)?;
        Position::try_new(row, col).ok_or_else(|| {
            de::Error::custom(format!("position ({row}, {col}) is outside the 3x3 board"))
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
