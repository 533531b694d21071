//! First-class move records for the match engine.
//!
//! Moves are domain events, not side effects: they can be validated
//! before application, serialized for replay, and enumerated from the
//! ledger to reconstruct the board.

use crate::types::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a coordinate.
///
/// `winning` starts false and is set retroactively on exactly the moves
/// that form the streak which ended the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark is placed.
    pub coord: Coord,
    winning: bool,
}

impl Move {
    /// Creates a move; never winning at creation time.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self {
            mark,
            coord,
            winning: false,
        }
    }

    /// True if this move belongs to the streak that ended the match.
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    pub(crate) fn flag_winning(&mut self) {
        self.winning = true;
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.coord)
    }
}

/// Error that can occur when validating a move request.
///
/// A well-behaved caller never triggers these; the engine absorbs them
/// as no-ops on its [`apply_move`](crate::MatchEngine::apply_move)
/// surface and surfaces them on
/// [`try_move`](crate::MatchEngine::try_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate falls outside the board.
    #[display("Coordinate {} is off the board", _0)]
    OutOfRange(Coord),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The match has already reached a terminal outcome.
    #[display("The match is already over")]
    MatchOver,
}

impl std::error::Error for MoveError {}
