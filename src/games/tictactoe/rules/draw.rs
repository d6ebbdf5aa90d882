//! Draw detection logic for tic-tac-toe.

use super::super::{MoveLog, RoundResult};
use tracing::instrument;

/// True iff every cell has been played and nobody completed a line.
///
/// `result` is the winner derivation for the same log.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn is_draw(log: &MoveLog, result: &RoundResult) -> bool {
    log.len() == MoveLog::MAX_LEN && *result == RoundResult::NoResult
}
