//! Prefixed column and reduced-text rendering of split rows.

use crate::split::{RowKind, SplitRow};

/// Placeholder shown on the side a row does not touch.
pub const BLANK_CELL: &str = " ";

/// Before/after text columns with diff prefixes, one entry per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitColumns {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Lay rows out as two prefixed columns.
///
/// Matches read `"  line"` on both sides, deletes `"- line"` on the left and
/// inserts `"+ line"` on the right; the untouched side gets [`BLANK_CELL`].
pub fn columns(rows: &[SplitRow]) -> SplitColumns {
    let mut out = SplitColumns {
        before: Vec::with_capacity(rows.len()),
        after: Vec::with_capacity(rows.len()),
    };
    for row in rows {
        match row.kind {
            RowKind::Match => {
                out.before.push(format!("  {}", row.left));
                out.after.push(format!("  {}", row.right));
            }
            RowKind::Delete => {
                out.before.push(format!("- {}", row.left));
                out.after.push(BLANK_CELL.to_string());
            }
            RowKind::Insert => {
                out.before.push(BLANK_CELL.to_string());
                out.after.push(format!("+ {}", row.right));
            }
        }
    }
    out
}

/// Join the right side of every row with `\n`.
///
/// This is the plain diagram source handed to the external renderer. Delete
/// rows contribute an empty line.
pub fn reduced_text(rows: &[SplitRow]) -> String {
    rows.iter()
        .map(|row| row.right.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
