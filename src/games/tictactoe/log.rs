//! Append-only move log for a single round.

use super::action::Move;
use super::types::CELL_COUNT;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ordered record of every move made in the current round, oldest first.
///
/// The log is the only game state a session keeps. Board, active symbol
/// and result are all replayed from it on demand.
///
/// [`MoveLog::from_moves`] accepts any sequence so the rules engine can be
/// exercised on logs the session would never produce; the session itself
/// only grows a log through `push`, which it guards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Longest possible log: one move per cell.
    pub const MAX_LEN: usize = CELL_COUNT;

    /// Creates an empty log.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Wraps an existing sequence of moves without validating it.
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Number of moves made.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True before the first move of a round.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were made.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates moves oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Iterates moves newest first, the order a turn log is shown in.
    pub fn turns_newest_first(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().rev()
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveLog {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self::from_moves(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Symbol};

    #[test]
    fn test_newest_first_reverses_storage_order() {
        let log: MoveLog = [
            Move::new(Position::new(0, 0), Symbol::X),
            Move::new(Position::new(1, 1), Symbol::O),
            Move::new(Position::new(2, 2), Symbol::X),
        ]
        .into_iter()
        .collect();

        let newest: Vec<_> = log.turns_newest_first().map(|m| m.position).collect();
        assert_eq!(
            newest,
            vec![
                Position::new(2, 2),
                Position::new(1, 1),
                Position::new(0, 0)
            ]
        );
        assert_eq!(log.moves()[0].position, Position::new(0, 0));
    }

    #[test]
    fn test_push_and_clear() {
        let mut log = MoveLog::new();
        assert!(log.is_empty());
        log.push(Move::new(Position::new(0, 1), Symbol::X));
        assert_eq!(log.len(), 1);
        assert_eq!(log.moves()[0].position, Position::new(0, 1));
        log.clear();
        assert!(log.is_empty());
    }
}
