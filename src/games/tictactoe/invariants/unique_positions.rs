//! Unique positions invariant: no cell is played twice.

use super::super::MoveLog;
use super::Invariant;

/// Invariant: every move targets a distinct cell.
///
/// Guarantees replay never overwrites a square, so the board derived from
/// the log is independent of replay order.
pub struct UniquePositionsInvariant;

impl Invariant<MoveLog> for UniquePositionsInvariant {
    fn holds(log: &MoveLog) -> bool {
        let mut seen = [false; MoveLog::MAX_LEN];
        for mv in log {
            let slot = &mut seen[mv.position.index()];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    fn description() -> &'static str {
        "No two moves share a position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position, Symbol};

    #[test]
    fn test_distinct_positions_hold() {
        let log = MoveLog::from_moves(vec![
            Move::new(Position::new(0, 0), Symbol::X),
            Move::new(Position::new(0, 1), Symbol::O),
        ]);
        assert!(UniquePositionsInvariant::holds(&log));
    }

    #[test]
    fn test_repeated_position_violates() {
        let log = MoveLog::from_moves(vec![
            Move::new(Position::new(2, 1), Symbol::X),
            Move::new(Position::new(0, 0), Symbol::O),
            Move::new(Position::new(2, 1), Symbol::X),
        ]);
        assert!(!UniquePositionsInvariant::holds(&log));
    }
}
