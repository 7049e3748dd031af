//! Error types for the oxo crate

use thiserror::Error;

use crate::board::{Coord, Player};

/// Main error type for the oxo crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {coord} is occupied or off the board")]
    IllegalMove { coord: Coord },

    #[error("no such move: {coord} does not lead to a child of the current state")]
    NoSuchMove { coord: Coord },

    #[error("state is terminal: there are no moves to choose from")]
    TerminalState,

    #[error("state is not terminal: the outcome is undefined")]
    NotTerminal,

    #[error("out of turn: it is {to_move}'s move")]
    OutOfTurn { to_move: Player },

    #[error("game already over")]
    GameOver,

    #[error("invalid player '{input}' (expected 'X' or 'O')")]
    InvalidPlayer { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
