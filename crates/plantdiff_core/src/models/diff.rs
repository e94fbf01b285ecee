//! Diff request and response payloads shared by the server and CLI.

use crate::split::SplitRow;
use serde::{Deserialize, Serialize};

/// Two diagram sources to compare, in any line-ending style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffRequest {
    pub old: String,
    pub new: String,
}

/// Line and operation totals for one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub old_lines: usize,
    pub new_lines: usize,
    pub matched: usize,
    pub deleted: usize,
    pub inserted: usize,
}

/// Result of comparing a [`DiffRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResponse {
    /// Minimal number of inserted plus deleted lines.
    pub distance: usize,
    pub rows: Vec<SplitRow>,
    /// Right-hand side of every row joined by `\n`.
    pub reduced: String,
    pub stats: DiffStats,
}
