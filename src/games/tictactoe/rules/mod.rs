//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive everything a round needs to know from its
//! move log. Nothing here holds state: every call replays from scratch.

pub mod board;
pub mod draw;
pub mod turn;
pub mod win;

pub use board::reconstruct_board;
pub use draw::is_draw;
pub use turn::current_turn;
pub use win::{WINNING_LINES, WinningLine, derive_winner, winning_symbol};
