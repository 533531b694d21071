//! Core domain types for the connect-N match engine.

use crate::ledger::MoveLedger;
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First mover (opens the match by convention).
    X,
    /// Second mover.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell coordinate: `(row, col)`, each in `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, from the top.
    pub row: usize,
    /// Column index, from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed here.
    Empty,
    /// Occupied by a player's mark.
    Occupied(Mark),
}

/// A board cell: its occupancy plus whether it belongs to the winning streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    square: Square,
    winning: bool,
}

impl Cell {
    /// An empty, non-winning cell.
    pub fn empty() -> Self {
        Self {
            square: Square::Empty,
            winning: false,
        }
    }

    /// Returns the cell's occupancy.
    pub fn square(&self) -> Square {
        self.square
    }

    /// True if this cell belongs to the streak that ended the match.
    pub fn is_winning(&self) -> bool {
        self.winning
    }
}

/// A size×size board view, derived from a [`MoveLedger`].
///
/// The board is never mutated in place: it is recomputed from the ledger
/// after every move, keeping the ledger the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::empty(); size * size],
        }
    }

    /// Derives the board by scattering the ledger onto an empty grid.
    ///
    /// Pure function of the ledger: coordinates are distinct by invariant,
    /// so each move lands on an empty cell.
    pub fn from_ledger(ledger: &MoveLedger, size: usize) -> Self {
        let mut board = Self::empty(size);
        for mov in ledger.iter() {
            let cell = Cell {
                square: Square::Occupied(mov.mark),
                winning: mov.is_winning(),
            };
            board.cells[mov.coord.row * size + mov.coord.col] = cell;
        }
        board
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at a coordinate, or `None` if off the board.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.cells.get(coord.row * self.size + coord.col)
    }

    /// Returns the occupancy at a coordinate (`Empty` if off the board).
    pub fn square(&self, coord: Coord) -> Square {
        self.get(coord).map_or(Square::Empty, |cell| cell.square())
    }

    /// Checks if the cell at a coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.square(coord) == Square::Empty
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col].square() {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col + 1 < self.size {
                    result.push(' ');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Match is ongoing.
    InProgress,
    /// Match ended with a winner.
    Won(Mark),
    /// Match ended with a full board and no winner.
    Draw,
}

impl MatchStatus {
    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            MatchStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// True once the match has reached a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::InProgress => write!(f, "In progress"),
            MatchStatus::Won(mark) => write!(f, "Player {:?} wins", mark),
            MatchStatus::Draw => write!(f, "Draw"),
        }
    }
}
