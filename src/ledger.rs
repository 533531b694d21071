//! The move ledger: an append-only record of moves played so far.
//!
//! The ledger is the single source of truth for board contents; the
//! [`Board`](crate::Board) is re-derived from it after every move.

use crate::action::Move;
use crate::types::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// Append-only, play-ordered record of the moves in one match.
///
/// Invariant: no two moves share a coordinate, and the length never
/// exceeds size² (both enforced by the engine's validation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move in play order.
    ///
    /// No validation here: the engine guarantees the coordinate is
    /// fresh before appending.
    pub fn append(&mut self, mov: Move) {
        self.moves.push(mov);
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if no move has been played yet.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates the moves in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// The moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The mark that must move next: the opposite of the most recent
    /// move's mark, or `opening` if the ledger is empty.
    pub fn next_mark(&self, opening: Mark) -> Mark {
        match self.moves.last() {
            Some(mov) => mov.mark.opponent(),
            None => opening,
        }
    }

    /// What mark occupies a coordinate, if any.
    pub fn mark_at(&self, coord: Coord) -> Option<Mark> {
        self.moves
            .iter()
            .find(|mov| mov.coord == coord)
            .map(|mov| mov.mark)
    }

    /// Retroactively flags the moves at the given coordinates as the
    /// winning streak.
    pub fn flag_winning(&mut self, cells: &[Coord]) {
        for mov in &mut self.moves {
            if cells.contains(&mov.coord) {
                mov.flag_winning();
            }
        }
    }

    /// Clears the ledger for a fresh match.
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_mark_alternates() {
        let mut ledger = MoveLedger::new();
        assert_eq!(ledger.next_mark(Mark::X), Mark::X);

        ledger.append(Move::new(Mark::X, Coord::new(0, 0)));
        assert_eq!(ledger.next_mark(Mark::X), Mark::O);

        ledger.append(Move::new(Mark::O, Coord::new(1, 1)));
        assert_eq!(ledger.next_mark(Mark::X), Mark::X);
    }

    #[test]
    fn test_next_mark_respects_opening() {
        let ledger = MoveLedger::new();
        assert_eq!(ledger.next_mark(Mark::O), Mark::O);
    }

    #[test]
    fn test_mark_at_finds_occupant() {
        let mut ledger = MoveLedger::new();
        ledger.append(Move::new(Mark::X, Coord::new(2, 1)));
        assert_eq!(ledger.mark_at(Coord::new(2, 1)), Some(Mark::X));
        assert_eq!(ledger.mark_at(Coord::new(1, 2)), None);
    }

    #[test]
    fn test_iter_is_play_ordered_and_restartable() {
        let mut ledger = MoveLedger::new();
        ledger.append(Move::new(Mark::X, Coord::new(0, 0)));
        ledger.append(Move::new(Mark::O, Coord::new(0, 1)));
        ledger.append(Move::new(Mark::X, Coord::new(0, 2)));

        let coords: Vec<Coord> = ledger.iter().map(|m| m.coord).collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );

        // A second pass yields the same sequence.
        let again: Vec<Coord> = ledger.iter().map(|m| m.coord).collect();
        assert_eq!(coords, again);
    }

    #[test]
    fn test_flag_winning_marks_only_listed_cells() {
        let mut ledger = MoveLedger::new();
        ledger.append(Move::new(Mark::X, Coord::new(0, 0)));
        ledger.append(Move::new(Mark::O, Coord::new(1, 0)));
        ledger.append(Move::new(Mark::X, Coord::new(0, 1)));

        ledger.flag_winning(&[Coord::new(0, 0), Coord::new(0, 1)]);

        let winning: Vec<bool> = ledger.iter().map(|m| m.is_winning()).collect();
        assert_eq!(winning, vec![true, false, true]);
    }

    #[test]
    fn test_clear_empties_ledger() {
        let mut ledger = MoveLedger::new();
        ledger.append(Move::new(Mark::X, Coord::new(0, 0)));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_mark(Mark::X), Mark::X);
    }
}
