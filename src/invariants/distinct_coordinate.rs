//! Distinct coordinate invariant: no coordinate is played twice.

use super::{Invariant, InvariantViolation, MatchState};
use std::collections::HashSet;

/// Invariant: No two ledger moves share a coordinate, and the ledger
/// never exceeds the cell count of the board.
pub struct DistinctCoordinateInvariant;

impl Invariant for DistinctCoordinateInvariant {
    fn check(state: &MatchState<'_>) -> Result<(), InvariantViolation> {
        let ledger = state.ledger();
        let capacity = state.config().cell_count();
        if ledger.len() > capacity {
            return Err(InvariantViolation::new(format!(
                "ledger holds {} moves on a {capacity}-cell board",
                ledger.len()
            )));
        }

        let mut seen = HashSet::new();
        for mov in ledger.iter() {
            if !seen.insert(mov.coord) {
                return Err(InvariantViolation::new(format!(
                    "coordinate {} was played twice",
                    mov.coord
                )));
            }
        }

        Ok(())
    }
}
