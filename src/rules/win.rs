//! Win detection: the four-direction streak scan.
//!
//! Runs once per move, anchored at the just-played coordinate. Each of
//! the four line families through the anchor is scanned independently
//! for a contiguous same-mark run of streak length, so the cost is
//! O(size) per direction rather than a full-board rescan.

use crate::types::{Board, Coord, Mark, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the four line families scanned for a win.
///
/// Declaration order is the fixed check order: when a move completes
/// runs in more than one direction, the first listed direction is the
/// one reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Fixed row, columns left to right.
    Horizontal,
    /// Fixed column, rows top to bottom.
    Vertical,
    /// Cells where `row - col` is constant, rows ascending.
    AntiDiagonal,
    /// Cells where `row + col` is constant, rows descending.
    MainDiagonal,
}

impl Direction {
    /// Stable index of this direction in the check order (0-3).
    pub fn index(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::AntiDiagonal => 2,
            Direction::MainDiagonal => 3,
        }
    }
}

/// A winning line: the mark, the direction it was found in, and the
/// streak-length run of coordinates that ended the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    mark: Mark,
    direction: Direction,
    cells: Vec<Coord>,
}

impl WinLine {
    /// The mark that won.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The direction the winning run was found in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The coordinates of the winning run, exactly streak cells,
    /// in line-scan order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

/// Scans the four lines through `anchor` for a run of `streak`
/// same-marked cells.
///
/// Directions are checked in declaration order and the first hit wins;
/// remaining directions are not evaluated.
#[instrument(skip(board))]
pub fn detect_win(board: &Board, anchor: Coord, streak: usize) -> Option<WinLine> {
    for direction in Direction::iter() {
        let line = line_through(board, anchor, direction);
        if let Some((mark, cells)) = scan_line(&line, streak) {
            return Some(WinLine {
                mark,
                direction,
                cells,
            });
        }
    }
    None
}

/// One whole-dimension line through the anchor.
///
/// Each slot is `Some((coord, mark))` for an occupied on-board cell and
/// `None` for an empty or off-board position. Off-board positions arise
/// on the diagonals near the edges and must break runs, so they share
/// the non-matching sentinel with empty cells.
fn line_through(
    board: &Board,
    anchor: Coord,
    direction: Direction,
) -> Vec<Option<(Coord, Mark)>> {
    let size = board.size() as isize;
    let (r, c) = (anchor.row as isize, anchor.col as isize);

    let positions: Vec<(isize, isize)> = match direction {
        Direction::Horizontal => (0..size).map(|i| (r, i)).collect(),
        Direction::Vertical => (0..size).map(|i| (i, c)).collect(),
        // row - col is constant along this diagonal
        Direction::AntiDiagonal => (0..size).map(|i| (i, i - (r - c))).collect(),
        // row + col is constant; enumerated bottom-up
        Direction::MainDiagonal => (0..size).rev().map(|i| (i, (r + c) - i)).collect(),
    };

    positions
        .into_iter()
        .map(|(row, col)| {
            if row < 0 || col < 0 || row >= size || col >= size {
                return None;
            }
            let coord = Coord::new(row as usize, col as usize);
            match board.square(coord) {
                Square::Occupied(mark) => Some((coord, mark)),
                Square::Empty => None,
            }
        })
        .collect()
}

/// Left-to-right run scan over one line.
///
/// A slot that differs from its predecessor resets the run to that slot
/// alone; a matching occupied slot extends it. Returns as soon as the
/// run reaches `streak`, so the reported cells are the earliest
/// qualifying run and exactly `streak` long.
fn scan_line(line: &[Option<(Coord, Mark)>], streak: usize) -> Option<(Mark, Vec<Coord>)> {
    let mut run_mark: Option<Mark> = None;
    let mut run: Vec<Coord> = Vec::new();

    for slot in line {
        match slot {
            Some((coord, mark)) => {
                if run_mark == Some(*mark) {
                    run.push(*coord);
                } else {
                    run_mark = Some(*mark);
                    run.clear();
                    run.push(*coord);
                }
                if run.len() >= streak {
                    return Some((*mark, run));
                }
            }
            None => {
                run_mark = None;
                run.clear();
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::ledger::MoveLedger;

    fn board_from(size: usize, moves: &[(Mark, (usize, usize))]) -> Board {
        let mut ledger = MoveLedger::new();
        for &(mark, (row, col)) in moves {
            ledger.append(Move::new(mark, Coord::new(row, col)));
        }
        Board::from_ledger(&ledger, size)
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::empty(3);
        assert_eq!(detect_win(&board, Coord::new(1, 1), 3), None);
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from(
            3,
            &[
                (Mark::X, (0, 0)),
                (Mark::O, (1, 0)),
                (Mark::X, (0, 1)),
                (Mark::O, (1, 1)),
                (Mark::X, (0, 2)),
            ],
        );

        let win = detect_win(&board, Coord::new(0, 2), 3).expect("horizontal win");
        assert_eq!(win.mark(), Mark::X);
        assert_eq!(win.direction(), Direction::Horizontal);
        assert_eq!(win.direction().index(), 0);
        assert_eq!(
            win.cells(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from(
            3,
            &[
                (Mark::X, (0, 1)),
                (Mark::O, (0, 0)),
                (Mark::X, (1, 1)),
                (Mark::O, (2, 0)),
                (Mark::X, (2, 1)),
            ],
        );

        let win = detect_win(&board, Coord::new(2, 1), 3).expect("vertical win");
        assert_eq!(win.direction(), Direction::Vertical);
        assert_eq!(
            win.cells(),
            &[Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        // row - col constant: (0,0), (1,1), (2,2)
        let board = board_from(
            3,
            &[
                (Mark::O, (0, 0)),
                (Mark::X, (0, 1)),
                (Mark::O, (1, 1)),
                (Mark::X, (0, 2)),
                (Mark::O, (2, 2)),
            ],
        );

        let win = detect_win(&board, Coord::new(2, 2), 3).expect("anti-diagonal win");
        assert_eq!(win.mark(), Mark::O);
        assert_eq!(win.direction(), Direction::AntiDiagonal);
        assert_eq!(win.direction().index(), 2);
        assert_eq!(
            win.cells(),
            &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_main_diagonal_win_scans_bottom_up() {
        // row + col constant: (2,0), (1,1), (0,2)
        let board = board_from(
            3,
            &[
                (Mark::X, (2, 0)),
                (Mark::O, (0, 0)),
                (Mark::X, (1, 1)),
                (Mark::O, (1, 0)),
                (Mark::X, (0, 2)),
            ],
        );

        let win = detect_win(&board, Coord::new(0, 2), 3).expect("main-diagonal win");
        assert_eq!(win.direction(), Direction::MainDiagonal);
        assert_eq!(win.direction().index(), 3);
        assert_eq!(
            win.cells(),
            &[Coord::new(2, 0), Coord::new(1, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_diagonal_bounded_by_board_edge() {
        // Anti-diagonal through (0,2) leaves the board after one cell;
        // the off-board slots must not join runs.
        let board = board_from(
            4,
            &[
                (Mark::X, (0, 2)),
                (Mark::X, (1, 3)),
                (Mark::O, (3, 3)),
            ],
        );
        assert_eq!(detect_win(&board, Coord::new(0, 2), 3), None);
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_from(
            5,
            &[
                (Mark::X, (2, 0)),
                (Mark::X, (2, 1)),
                (Mark::X, (2, 3)),
                (Mark::X, (2, 4)),
            ],
        );
        assert_eq!(detect_win(&board, Coord::new(2, 3), 3), None);
    }

    #[test]
    fn test_opponent_mark_breaks_run() {
        let board = board_from(
            5,
            &[
                (Mark::X, (0, 0)),
                (Mark::X, (0, 1)),
                (Mark::O, (0, 2)),
                (Mark::X, (0, 3)),
                (Mark::X, (0, 4)),
            ],
        );
        assert_eq!(detect_win(&board, Coord::new(0, 4), 3), None);
    }

    #[test]
    fn test_run_longer_than_streak_reports_earliest_streak_cells() {
        // Four in a row with streak 3: the first three cells win.
        let board = board_from(
            5,
            &[
                (Mark::X, (1, 0)),
                (Mark::X, (1, 1)),
                (Mark::X, (1, 2)),
                (Mark::X, (1, 3)),
            ],
        );

        let win = detect_win(&board, Coord::new(1, 1), 3).expect("win");
        assert_eq!(
            win.cells(),
            &[Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_win_detected_anywhere_on_anchored_line() {
        // The qualifying run shares the anchor's row but not its cell:
        // any run along the anchored line counts.
        let board = board_from(
            5,
            &[
                (Mark::X, (0, 0)),
                (Mark::X, (0, 1)),
                (Mark::X, (0, 2)),
            ],
        );

        let win = detect_win(&board, Coord::new(0, 4), 3).expect("win along the row");
        assert_eq!(win.direction(), Direction::Horizontal);
        assert_eq!(
            win.cells(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_direction_tie_break_prefers_horizontal() {
        // (2,2) completes both a horizontal and a vertical run.
        let board = board_from(
            5,
            &[
                (Mark::X, (2, 0)),
                (Mark::X, (2, 1)),
                (Mark::X, (0, 2)),
                (Mark::X, (1, 2)),
                (Mark::X, (2, 2)),
            ],
        );

        let win = detect_win(&board, Coord::new(2, 2), 3).expect("win");
        assert_eq!(win.direction(), Direction::Horizontal);
    }

    #[test]
    fn test_streak_four_on_larger_board() {
        let board = board_from(
            5,
            &[
                (Mark::O, (0, 0)),
                (Mark::O, (1, 1)),
                (Mark::O, (2, 2)),
                (Mark::O, (3, 3)),
            ],
        );

        assert_eq!(detect_win(&board, Coord::new(3, 3), 5), None);
        let win = detect_win(&board, Coord::new(3, 3), 4).expect("streak-4 win");
        assert_eq!(win.direction(), Direction::AntiDiagonal);
        assert_eq!(win.cells().len(), 4);
    }
}
