//! Error types for the diff engine and the application layer around it.
use std::fmt;
use thiserror::Error;

/// Internal-consistency failures raised by the diff engine.
///
/// The search is total over finite inputs, so any variant means a bug.
/// Callers surface these as fatal and never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("no edit path found within {max_depth} steps for {old_len}x{new_len} input")]
    NoPath {
        old_len: usize,
        new_len: usize,
        max_depth: usize,
    },

    #[error("trace has no furthest point for diagonal {diagonal} at depth {depth}")]
    MissingFrontier { depth: usize, diagonal: isize },

    #[error("backtracking stopped at ({x}, {y}) instead of the origin")]
    UnfinishedBacktrack { x: usize, y: usize },
}

/// Which side of a comparison an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    Old,
    New,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSide::Old => f.write_str("old"),
            InputSide::New => f.write_str("new"),
        }
    }
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Diff engine error: {0}")]
    Diff(#[from] DiffError),

    #[error("Input too large: {side} side has {lines} lines (limit {limit})")]
    InputTooLarge {
        side: InputSide,
        lines: usize,
        limit: usize,
    },

    #[error("Internal server error")]
    Internal,
}
