//! Win detection logic for tic-tac-toe.

use super::super::{Board, PlayerRegistry, Position, RoundResult, Symbol};
use tracing::{debug, instrument, warn};

/// Three cells that win the round when they hold the same symbol.
pub type WinningLine = [Position; 3];

const fn cell(index: usize) -> Position {
    Position::ALL[index]
}

/// The 8 winning lines: rows, then columns, then the two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [cell(0), cell(1), cell(2)],
    [cell(3), cell(4), cell(5)],
    [cell(6), cell(7), cell(8)],
    // Columns
    [cell(0), cell(3), cell(6)],
    [cell(1), cell(4), cell(7)],
    [cell(2), cell(5), cell(8)],
    // Diagonals
    [cell(0), cell(4), cell(8)],
    [cell(2), cell(4), cell(6)],
];

/// Returns the symbol holding a complete line, if any.
///
/// Every line is examined and the last complete one decides. Two complete
/// lines only happen on boards that no alternating log can produce; the
/// answer there is whatever the last line in [`WINNING_LINES`] order says.
#[instrument(skip(board))]
pub fn winning_symbol(board: &Board) -> Option<Symbol> {
    let mut winner = None;

    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if let Some(symbol) = sq.symbol()
            && sq == board.get(b)
            && sq == board.get(c)
        {
            if let Some(previous) = winner
                && previous != symbol
            {
                warn!(%previous, %symbol, "Both symbols hold a line");
            }
            winner = Some(symbol);
        }
    }

    winner
}

/// Derives the round result from a board, naming the winner from `registry`.
///
/// Never returns [`RoundResult::Draw`]; draws also depend on the log
/// length, see [`super::is_draw`].
#[instrument(skip(board, registry))]
pub fn derive_winner(board: &Board, registry: &PlayerRegistry) -> RoundResult {
    match winning_symbol(board) {
        Some(symbol) => {
            let name = registry.name(symbol).to_string();
            debug!(%symbol, %name, "Line completed");
            RoundResult::Win { symbol, name }
        }
        None => RoundResult::NoResult,
    }
}
