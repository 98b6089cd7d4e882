//! Error types for the rules core.
//!
//! Only conditions reachable from user input are errors here. A move
//! rejected for leaving the mover in check is a normal
//! [`MoveStatus`](crate::player::MoveStatus) outcome, and internal
//! invariant violations (executing a stale move, a board without a
//! king) are programming errors that panic.

use thiserror::Error;

use crate::geometry::Coordinate;

/// Errors surfaced to the calling front-end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed or out-of-range square reference from input parsing.
    #[error("unrecognized square notation {0:?}")]
    InvalidNotation(String),

    /// Figure selection pointed at an empty square.
    #[error("no figure on square {0}")]
    EmptySquare(Coordinate),

    /// Figure selection pointed at an opponent figure.
    #[error("figure on square {0} belongs to the opponent")]
    WrongColor(Coordinate),

    /// The requested (source, destination) pair matches no legal move.
    #[error("no legal move from square {from} to square {to}")]
    NoSuchMove { from: Coordinate, to: Coordinate },
}

/// Result type alias for rules-core operations.
pub type EngineResult<T> = Result<T, EngineError>;
