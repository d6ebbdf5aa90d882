//! Board reconstruction by replay.

use super::super::{Board, MoveLog, Square};
use tracing::{instrument, trace};

/// Replays `log` onto an empty board.
///
/// Every move in the log is written in order. With unique positions the
/// order does not change the result, but the whole log is always walked.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn reconstruct_board(log: &MoveLog) -> Board {
    let mut board = Board::new();
    for mv in log {
        trace!(%mv, "Replaying move");
        board.set(mv.position, Square::Occupied(mv.symbol));
    }
    board
}
