//! Side-by-side row projection of edit scripts.

use crate::diff::EditOp;
use serde::{Deserialize, Serialize};

/// Kind of change a split row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Match,
    Delete,
    Insert,
}

impl RowKind {
    /// Single-character diff marker (`=`, `-`, `+`).
    pub fn marker(self) -> char {
        match self {
            RowKind::Match => '=',
            RowKind::Delete => '-',
            RowKind::Insert => '+',
        }
    }
}

/// One display row pairing an old-side line with a new-side line.
///
/// The side an operation does not touch is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRow {
    pub left: String,
    pub right: String,
    pub kind: RowKind,
}

impl<T: AsRef<str>> From<&EditOp<T>> for SplitRow {
    fn from(op: &EditOp<T>) -> Self {
        match op {
            EditOp::Match { old, new } => SplitRow {
                left: old.as_ref().to_string(),
                right: new.as_ref().to_string(),
                kind: RowKind::Match,
            },
            EditOp::Delete(old) => SplitRow {
                left: old.as_ref().to_string(),
                right: String::new(),
                kind: RowKind::Delete,
            },
            EditOp::Insert(new) => SplitRow {
                left: String::new(),
                right: new.as_ref().to_string(),
                kind: RowKind::Insert,
            },
        }
    }
}

/// Map an edit script to display rows, one row per operation, in order.
///
/// Rows are never merged: a delete followed by an insert stays two rows even
/// where a reader might see a replaced line.
pub fn project<T: AsRef<str>>(ops: &[EditOp<T>]) -> Vec<SplitRow> {
    ops.iter().map(SplitRow::from).collect()
}
