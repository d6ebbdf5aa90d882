//! Alternating turn invariant: symbols alternate X, O, X, O, ...

use super::super::{MoveLog, Symbol};
use super::Invariant;

/// Invariant: symbols alternate strictly, starting with `X`.
///
/// Move `i` (0-indexed) uses `X` when `i` is even and `O` when odd.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveLog> for AlternatingTurnInvariant {
    fn holds(log: &MoveLog) -> bool {
        log.iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            mv.symbol == expected
        })
    }

    fn description() -> &'static str {
        "Symbols alternate turns (X, O, X, O, ...)"
    }
}
