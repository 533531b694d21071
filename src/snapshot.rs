//! Serializable read-only view of a match for the presentation layer.

use crate::rules::WinLine;
use crate::types::{Board, Mark, MatchStatus};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render a match.
///
/// Snapshots are value types: two snapshots taken without an
/// intervening move compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    board: Board,
    status: MatchStatus,
    next_mark: Mark,
    win_line: Option<WinLine>,
}

impl MatchSnapshot {
    pub(crate) fn new(
        board: Board,
        status: MatchStatus,
        next_mark: Mark,
        win_line: Option<WinLine>,
    ) -> Self {
        Self {
            board,
            status,
            next_mark,
            win_line,
        }
    }

    /// The derived board at the time of the snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The match status at the time of the snapshot.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The mark that moves next (meaningful while in progress).
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// The winning line, if the match has been won.
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    /// True once the match has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// A status line for display.
    pub fn status_string(&self) -> String {
        match self.status {
            MatchStatus::InProgress => {
                format!("In progress. Player {:?} to move.", self.next_mark)
            }
            MatchStatus::Won(mark) => format!("Match over. Player {:?} wins!", mark),
            MatchStatus::Draw => "Match over. Draw!".to_string(),
        }
    }
}
