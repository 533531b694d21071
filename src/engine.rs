//! The match engine: turn sequencing, board derivation, and the
//! per-move win/draw check.
//!
//! One engine instance serves one match. It owns the move ledger,
//! derives the board from it after every move, and reports the match
//! status as a three-state machine: `InProgress` transitions to
//! `Won` or `Draw`, both terminal; terminal states accept only
//! [`reset`](MatchEngine::reset).

use crate::action::{Move, MoveError};
use crate::config::MatchConfig;
use crate::invariants;
use crate::ledger::MoveLedger;
use crate::rules::{self, WinLine};
use crate::snapshot::MatchSnapshot;
use crate::types::{Board, Coord, Mark, MatchStatus};
use tracing::{debug, instrument, warn};

/// State machine for one connect-N match.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    ledger: MoveLedger,
    board: Board,
    status: MatchStatus,
    win: Option<WinLine>,
}

impl MatchEngine {
    /// Creates a fresh engine for one match.
    ///
    /// The configuration is already validated by
    /// [`MatchConfig::new`](crate::MatchConfig::new); the engine
    /// assumes it holds.
    #[instrument]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            ledger: MoveLedger::new(),
            board: Board::empty(config.size()),
            status: MatchStatus::InProgress,
            win: None,
        }
    }

    /// The match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The derived, read-only board view.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move ledger, enumerable in play order.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// The current match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The mark that must move next.
    pub fn next_mark(&self) -> Mark {
        self.ledger.next_mark(self.config.opening_mark())
    }

    /// The winning line, once the match has been won.
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win.as_ref()
    }

    /// A serializable read-only view for the presentation layer.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::new(
            self.board.clone(),
            self.status,
            self.next_mark(),
            self.win.clone(),
        )
    }

    fn validate(&self, coord: Coord) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::MatchOver);
        }
        let size = self.config.size();
        if coord.row >= size || coord.col >= size {
            return Err(MoveError::OutOfRange(coord));
        }
        if !self.board.is_empty(coord) {
            return Err(MoveError::CellOccupied(coord));
        }
        Ok(())
    }

    /// Plays the next mark at `coord`, surfacing rejections as errors.
    ///
    /// On success the ledger is appended, the board re-derived, and the
    /// anchored four-direction scan run; the draw check follows only if
    /// no win was found.
    ///
    /// # Errors
    ///
    /// [`MoveError::MatchOver`], [`MoveError::OutOfRange`], or
    /// [`MoveError::CellOccupied`]; the engine state is untouched on
    /// any of them.
    #[instrument(skip(self), fields(mark = ?self.next_mark()))]
    pub fn try_move(&mut self, coord: Coord) -> Result<MatchStatus, MoveError> {
        self.validate(coord)?;

        let mark = self.next_mark();
        self.ledger.append(Move::new(mark, coord));
        self.board = Board::from_ledger(&self.ledger, self.config.size());

        if let Some(win) = rules::detect_win(&self.board, coord, self.config.streak()) {
            self.ledger.flag_winning(win.cells());
            self.board = Board::from_ledger(&self.ledger, self.config.size());
            self.status = MatchStatus::Won(win.mark());
            debug!(?mark, direction = ?win.direction(), "match won");
            self.win = Some(win);
        } else if rules::is_full(&self.board) {
            self.status = MatchStatus::Draw;
            debug!("match drawn");
        } else {
            debug!(?mark, %coord, "move accepted");
        }

        invariants::assert_invariants(self);

        Ok(self.status)
    }

    /// Plays the next mark at `(row, col)`, absorbing rejections.
    ///
    /// The presentation layer is expected to never request an illegal
    /// move, but it must not be trusted: out-of-range coordinates,
    /// occupied cells, and moves after a terminal outcome are logged
    /// and ignored without touching the ledger.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MatchStatus {
        match self.try_move(Coord::new(row, col)) {
            Ok(status) => status,
            Err(reason) => {
                warn!(%reason, "move ignored");
                self.status
            }
        }
    }

    /// Clears the ledger, returning the match to `InProgress` with an
    /// empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.board = Board::empty(self.config.size());
        self.status = MatchStatus::InProgress;
        self.win = None;
        debug!("match reset");
    }

    /// Drives a fresh engine through a coordinate sequence.
    ///
    /// Stops early once a terminal outcome is reached; trailing
    /// coordinates are not applied.
    ///
    /// # Errors
    ///
    /// The first [`MoveError`] hit while replaying.
    #[instrument]
    pub fn replay(config: MatchConfig, coords: &[Coord]) -> Result<Self, MoveError> {
        let mut engine = Self::new(config);
        for &coord in coords {
            if engine.status.is_terminal() {
                break;
            }
            engine.try_move(coord)?;
        }
        Ok(engine)
    }
}
