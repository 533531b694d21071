//! Per-match configuration: board size, winning streak, opening mark.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimum winning streak length accepted by [`MatchConfig::new`].
pub const MIN_STREAK: usize = 3;

/// Immutable configuration for one match.
///
/// Validated at construction: `streak >= 3 && size >= streak`. The
/// engine assumes a valid configuration once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    size: usize,
    streak: usize,
    opening_mark: Mark,
}

impl MatchConfig {
    /// Creates a validated configuration with `X` as the opening mark.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `streak < 3` or `size < streak`.
    #[instrument]
    pub fn new(size: usize, streak: usize) -> Result<Self, ConfigError> {
        if streak < MIN_STREAK {
            return Err(ConfigError::StreakTooShort(streak));
        }
        if size < streak {
            return Err(ConfigError::SizeBelowStreak { size, streak });
        }
        Ok(Self {
            size,
            streak,
            opening_mark: Mark::X,
        })
    }

    /// The classic 3x3, three-in-a-row configuration.
    pub fn classic() -> Self {
        Self {
            size: 3,
            streak: 3,
            opening_mark: Mark::X,
        }
    }

    /// Overrides which mark moves first.
    pub fn with_opening_mark(mut self, mark: Mark) -> Self {
        self.opening_mark = mark;
        self
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Contiguous same-mark run length required to win.
    pub fn streak(&self) -> usize {
        self.streak
    }

    /// The mark that moves first.
    pub fn opening_mark(&self) -> Mark {
        self.opening_mark
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}

/// Error rejecting an invalid match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The streak is below the minimum of three.
    #[display("Streak must be at least {MIN_STREAK}, got {_0}")]
    StreakTooShort(usize),

    /// The board is too small to fit the streak.
    #[display("Board size {size} is smaller than streak {streak}")]
    SizeBelowStreak {
        /// Requested board size.
        size: usize,
        /// Requested streak.
        streak: usize,
    },
}

impl std::error::Error for ConfigError {}
