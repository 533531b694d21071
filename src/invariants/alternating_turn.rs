//! Alternating turn invariant: marks alternate from the opening mark.

use super::{Invariant, InvariantViolation, MatchState};

/// Invariant: Marks in the ledger alternate, starting with the
/// configured opening mark.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    fn check(state: &MatchState<'_>) -> Result<(), InvariantViolation> {
        let mut expected = state.config().opening_mark();

        for (index, mov) in state.ledger().iter().enumerate() {
            if mov.mark != expected {
                return Err(InvariantViolation::new(format!(
                    "move {index} played {:?}, expected {:?}",
                    mov.mark, expected
                )));
            }
            expected = expected.opponent();
        }

        Ok(())
    }
}
