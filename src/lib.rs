//! Pure connect-N ("Caro"/Gomoku family) match logic.
//!
//! Two players alternately mark cells on an N×N grid; a player wins by
//! placing `streak` same-marked cells contiguously in a row, column, or
//! either diagonal. Board size and streak are configurable per match.
//!
//! # Architecture
//!
//! - **Ledger**: append-only move history, the single source of truth
//!   for board contents.
//! - **Engine**: owns the ledger, derives the board from it, assigns
//!   the next mark, and runs the anchored four-direction win scan
//!   after every move.
//! - **Invariants**: first-class runtime properties checked after each
//!   accepted move in debug builds.
//!
//! The surrounding presentation layer (icons, forms, modals, layout)
//! is an external collaborator: it supplies a [`MatchConfig`] and a
//! stream of [`apply_move`](MatchEngine::apply_move) calls, and renders
//! from [`MatchSnapshot`]s.
//!
//! # Example
//!
//! ```
//! use caro::{MatchConfig, MatchEngine, MatchStatus, Mark};
//!
//! let config = MatchConfig::new(3, 3)?;
//! let mut engine = MatchEngine::new(config);
//!
//! engine.apply_move(0, 0); // X
//! engine.apply_move(1, 0); // O
//! engine.apply_move(0, 1); // X
//! engine.apply_move(1, 1); // O
//! let status = engine.apply_move(0, 2); // X completes the top row
//!
//! assert_eq!(status, MatchStatus::Won(Mark::X));
//! # Ok::<(), caro::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
pub mod invariants;
mod ledger;
mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, MIN_STREAK, MatchConfig};
pub use engine::MatchEngine;
pub use ledger::MoveLedger;
pub use rules::{Direction, WinLine};
pub use snapshot::MatchSnapshot;
pub use types::{Board, Cell, Coord, Mark, MatchStatus, Square};
