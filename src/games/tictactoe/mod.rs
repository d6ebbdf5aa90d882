//! Tic-tac-toe rules engine.
//!
//! Everything a round needs is derived from its [`MoveLog`]:
//! [`rules::reconstruct_board`] replays it, [`rules::derive_winner`] scans
//! the winning lines, [`rules::is_draw`] and [`rules::current_turn`] read
//! its length.

mod action;
mod log;
mod position;
mod registry;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, BoundedLengthInvariant, Invariant, InvariantSet,
    InvariantViolation, MoveLogInvariants, UniquePositionsInvariant,
};
pub use log::MoveLog;
pub use position::Position;
pub use registry::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
pub use rules::{
    WINNING_LINES, WinningLine, current_turn, derive_winner, is_draw, reconstruct_board,
    winning_symbol,
};
pub use types::{Board, CELL_COUNT, RoundResult, Square, Symbol};
