//! Turn order.

use super::super::{MoveLog, Symbol};

/// Symbol that makes the next move: `X` on even log lengths, `O` on odd.
pub fn current_turn(log: &MoveLog) -> Symbol {
    if log.len() % 2 == 0 { Symbol::X } else { Symbol::O }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position};

    #[test]
    fn test_x_starts() {
        assert_eq!(current_turn(&MoveLog::new()), Symbol::X);
    }

    #[test]
    fn test_alternates_with_length() {
        let mut moves = Vec::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let log = MoveLog::from_moves(moves.clone());
            let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            assert_eq!(current_turn(&log), expected);
            moves.push(Move::new(*pos, expected));
        }
    }
}
