//! Bounded length invariant: a round has at most one move per cell.

use super::super::MoveLog;
use super::Invariant;

/// Invariant: the log never grows past the number of cells.
pub struct BoundedLengthInvariant;

impl Invariant<MoveLog> for BoundedLengthInvariant {
    fn holds(log: &MoveLog) -> bool {
        log.len() <= MoveLog::MAX_LEN
    }

    fn description() -> &'static str {
        "Move log holds at most 9 moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position, Symbol};

    #[test]
    fn test_full_board_holds() {
        let log: MoveLog = Position::ALL
            .iter()
            .map(|pos| Move::new(*pos, Symbol::X))
            .collect();
        assert!(BoundedLengthInvariant::holds(&log));
    }

    #[test]
    fn test_tenth_move_violates() {
        let mut moves: Vec<_> = Position::ALL
            .iter()
            .map(|pos| Move::new(*pos, Symbol::X))
            .collect();
        moves.push(Move::new(Position::new(0, 0), Symbol::O));
        assert!(!BoundedLengthInvariant::holds(&MoveLog::from_moves(moves)));
    }
}
