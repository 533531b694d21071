//! Board derivation invariant: the board always matches the ledger.

use super::{Invariant, InvariantViolation, MatchState};
use crate::types::Board;

/// Invariant: The board equals a fresh derivation from the ledger.
///
/// The ledger is the single source of truth; this catches any drift
/// between the two.
pub struct BoardDerivedInvariant;

impl Invariant for BoardDerivedInvariant {
    fn check(state: &MatchState<'_>) -> Result<(), InvariantViolation> {
        let derived = Board::from_ledger(state.ledger(), state.config().size());
        if derived == *state.board() {
            Ok(())
        } else {
            Err(InvariantViolation::new(
                "board does not match its ledger derivation",
            ))
        }
    }
}
