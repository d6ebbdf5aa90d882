//! Strictly Rematch - tic-tac-toe derived from a move log
//!
//! Every piece of game state is replayed from an append-only log of moves.
//!
//! # Architecture
//!
//! - **Rules engine**: pure functions that rebuild the board, find the
//!   winner, detect draws and compute whose turn it is
//! - **Session**: owns the move log and player names, mediates every
//!   mutation and re-derives state on each query
//! - **Console**: a line-oriented front end over a session
//!
//! # Example
//!
//! ```
//! use strictly_rematch::{Position, SessionController, Symbol};
//!
//! let mut session = SessionController::default();
//! session.rename_player(Symbol::X, "Ada");
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     session.select_square(Position::new(row, col)).unwrap();
//! }
//! assert_eq!(session.query().result().to_string(), "Ada won!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Session management
pub use session::{RoundPhase, SessionController, SharedSession, Snapshot};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoundedLengthInvariant, CELL_COUNT, DEFAULT_O_NAME,
    DEFAULT_X_NAME, Invariant, InvariantSet, InvariantViolation, Move, MoveError, MoveLog,
    MoveLogInvariants, PlayerRegistry, Position, RoundResult, Square, Symbol,
    UniquePositionsInvariant, WINNING_LINES, WinningLine, current_turn, derive_winner, is_draw,
    reconstruct_board, winning_symbol,
};
