//! Error types for board domain validation, parsing, and move reconciliation.

use super::TaskStatus;
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty after trimming.
    #[error("{kind} identifier must not be empty")]
    EmptyIdentifier {
        /// Which identifier was rejected.
        kind: &'static str,
    },

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The position policy cannot produce ordered positions.
    #[error("invalid position policy: step {step}, ceiling {ceiling}")]
    InvalidPositionPolicy {
        /// Configured gap between consecutive positions.
        step: u64,
        /// Configured upper bound for positions.
        ceiling: u64,
    },

    /// The position policy could not be decoded from configuration.
    #[error("malformed position policy: {0}")]
    MalformedPositionPolicy(String),
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Precondition failures raised by the board reconciler.
///
/// These indicate the drag source and the board state have drifted apart.
/// They are logic errors, not user-facing conditions: the caller discards the
/// move and keeps its current board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The source index does not address a card in the source column.
    #[error("source index {index} out of range for column {column} of length {len}")]
    SourceIndexOutOfRange {
        /// Column the card was dragged from.
        column: TaskStatus,
        /// Requested index.
        index: usize,
        /// Number of cards in the column.
        len: usize,
    },

    /// The destination index is not a valid insertion point.
    #[error("destination index {index} out of range for column {column} of length {len}")]
    DestinationIndexOutOfRange {
        /// Column the card was dropped into.
        column: TaskStatus,
        /// Requested insertion index.
        index: usize,
        /// Number of cards in the column once the moved card is lifted out.
        len: usize,
    },
}
