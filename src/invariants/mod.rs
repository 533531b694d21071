//! First-class invariants for the match engine.
//!
//! Invariants are logical properties that must hold throughout a match.
//! They are testable independently and serve as documentation of the
//! engine's guarantees; the engine checks them after every accepted
//! move in debug builds.
//!
//! Invariants inspect a [`MatchState`] view rather than the engine
//! itself, so tests can assemble corrupted states the engine refuses
//! to produce and assert that each invariant rejects them.

use crate::config::MatchConfig;
use crate::ledger::MoveLedger;
use crate::types::Board;
use tracing::warn;

/// Borrowed view of the state the invariants inspect.
///
/// Constructible from any config/ledger/board triple, independent of
/// the engine.
#[derive(Debug, Clone, Copy)]
pub struct MatchState<'a> {
    config: &'a MatchConfig,
    ledger: &'a MoveLedger,
    board: &'a Board,
}

impl<'a> MatchState<'a> {
    /// Creates a view over the given match state.
    pub fn new(config: &'a MatchConfig, ledger: &'a MoveLedger, board: &'a Board) -> Self {
        Self {
            config,
            ledger,
            board,
        }
    }

    /// The match configuration.
    pub fn config(&self) -> &MatchConfig {
        self.config
    }

    /// The move ledger.
    pub fn ledger(&self) -> &MoveLedger {
        self.ledger
    }

    /// The board under inspection.
    pub fn board(&self) -> &Board {
        self.board
    }
}

/// A logical property that must hold for a match state.
pub trait Invariant {
    /// Checks the invariant, describing the breach on failure.
    fn check(state: &MatchState<'_>) -> Result<(), InvariantViolation>;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so concrete invariants
/// compose into a single verification step.
pub trait InvariantSet {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &MatchState<'_>) -> Result<(), Vec<InvariantViolation>>;
}

impl<I1, I2> InvariantSet for (I1, I2)
where
    I1: Invariant,
    I2: Invariant,
{
    fn check_all(state: &MatchState<'_>) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [I1::check(state), I2::check(state)]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<I1, I2, I3> InvariantSet for (I1, I2, I3)
where
    I1: Invariant,
    I2: Invariant,
    I3: Invariant,
{
    fn check_all(state: &MatchState<'_>) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> =
            [I1::check(state), I2::check(state), I3::check(state)]
                .into_iter()
                .filter_map(Result::err)
                .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod board_derived;
pub mod distinct_coordinate;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_derived::BoardDerivedInvariant;
pub use distinct_coordinate::DistinctCoordinateInvariant;

/// All match-engine invariants as a composable set.
pub type MatchInvariants = (
    AlternatingTurnInvariant,
    DistinctCoordinateInvariant,
    BoardDerivedInvariant,
);

/// Asserts that all engine invariants hold (panics in debug builds).
pub fn assert_invariants(engine: &crate::MatchEngine) {
    let state = MatchState::new(engine.config(), engine.ledger(), engine.board());
    let result = MatchInvariants::check_all(&state);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = %violation.description, "invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "engine invariants violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Mark, MatchConfig, MatchEngine, Move};

    fn state_of(engine: &MatchEngine) -> MatchState<'_> {
        MatchState::new(engine.config(), engine.ledger(), engine.board())
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_engine() {
        let engine = MatchEngine::new(MatchConfig::classic());
        assert!(MatchInvariants::check_all(&state_of(&engine)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
            Coord::new(2, 2),
        ];
        let engine = MatchEngine::replay(MatchConfig::classic(), &coords)
            .expect("legal sequence");
        assert!(MatchInvariants::check_all(&state_of(&engine)).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Wrong opening mark, a repeated coordinate, and a board that
        // was never re-derived: each invariant must report its breach.
        let config = MatchConfig::classic();
        let mut ledger = MoveLedger::new();
        ledger.append(Move::new(Mark::O, Coord::new(0, 0)));
        ledger.append(Move::new(Mark::X, Coord::new(0, 0)));
        let board = Board::empty(3);

        let state = MatchState::new(&config, &ledger, &board);
        let violations = MatchInvariants::check_all(&state).expect_err("corrupted state");
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = MatchEngine::new(MatchConfig::classic());

        type TwoInvariants = (AlternatingTurnInvariant, DistinctCoordinateInvariant);
        assert!(TwoInvariants::check_all(&state_of(&engine)).is_ok());
    }
}
