// =============================================================================
// Errors
//
// Contract errors and illegal moves are returned to the caller and never
// mutate state. A move onto a same-color or neutral square is not an error:
// the resolver reports it as `moved: false`.
// =============================================================================

use thiserror::Error;

use crate::piece::{Color, Direction};

/// Broad classification of a [`RulesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke the engine's contract (bad coordinates, wrong owner, ...).
    Contract,
    /// The selected piece would leave the board.
    IllegalMove,
    /// A snapshot could not be decoded.
    Format,
}

/// Errors raised by the board, the move resolver and the game session.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("coordinates ({row}, {col}) are outside the 7x7 board")]
    OutOfRange { row: isize, col: isize },

    #[error("no mobile piece at ({row}, {col})")]
    NotMobile { row: usize, col: usize },

    #[error("piece at ({row}, {col}) does not belong to the active player {active}")]
    NotOwner {
        row: usize,
        col: usize,
        active: Color,
    },

    #[error("move from {from:?} would land off the board at {to:?}")]
    IllegalMove {
        from: (usize, usize),
        to: (isize, isize),
    },

    #[error("cannot reverse direction {0}")]
    InvalidReversal(Direction),

    #[error("invalid piece: color {color} with direction {direction}")]
    InvalidPiece { color: Color, direction: Direction },

    #[error("action '{action}' is not allowed while {phase}")]
    UnexpectedAction {
        action: &'static str,
        phase: &'static str,
    },

    #[error("malformed snapshot: {0}")]
    Format(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RulesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RulesError::IllegalMove { .. } => ErrorKind::IllegalMove,
            RulesError::Format(_) | RulesError::Json(_) => ErrorKind::Format,
            _ => ErrorKind::Contract,
        }
    }

    pub(crate) fn out_of_range(row: usize, col: usize) -> Self {
        RulesError::OutOfRange {
            row: row as isize,
            col: col as isize,
        }
    }
}

/// Errors that can occur when loading a [`RulesConfig`](crate::config::RulesConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, RulesError>;
