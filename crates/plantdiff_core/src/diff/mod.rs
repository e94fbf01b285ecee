//! Myers shortest-edit-script engine.
//!
//! [`search::shortest_edit`] runs the forward search and keeps every depth's
//! furthest points; [`reconstruct::backtrack`] walks them back into an ordered
//! script. Both consult [`step::choose_step`] for the same tie-break.
//!
//! The engine is a pure function of its two inputs. It holds no state between
//! calls, performs no I/O, and cannot be interrupted. Memory grows with the
//! square of the edit distance, so callers must cap input size before calling
//! in (see [`crate::compare`]).

/// Backward reconstruction of the edit script.
pub mod reconstruct;
/// Forward furthest-reaching search.
pub mod search;
/// Tie-break shared by both passes.
pub mod step;
/// Per-depth furthest-point storage.
pub mod trace;


use crate::error::DiffError;

/// One operation of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp<T> {
    /// Line kept from `old` as `new`.
    Match { old: T, new: T },
    /// Line present only in the old sequence.
    Delete(T),
    /// Line present only in the new sequence.
    Insert(T),
}

impl<T> EditOp<T> {
    /// Old-side value, present for matches and deletes.
    pub fn old_value(&self) -> Option<&T> {
        match self {
            EditOp::Match { old, .. } | EditOp::Delete(old) => Some(old),
            EditOp::Insert(_) => None,
        }
    }

    /// New-side value, present for matches and inserts.
    pub fn new_value(&self) -> Option<&T> {
        match self {
            EditOp::Match { new, .. } | EditOp::Insert(new) => Some(new),
            EditOp::Delete(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, EditOp::Match { .. })
    }
}

/// Per-kind operation totals of a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub matched: usize,
    pub deleted: usize,
    pub inserted: usize,
}

/// Ordered edit script with the distance the search found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    ops: Vec<EditOp<T>>,
    distance: usize,
}

impl<T> EditScript<T> {
    pub fn ops(&self) -> &[EditOp<T>] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EditOp<T>> {
        self.ops
    }

    /// Minimal number of inserts plus deletes.
    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn counts(&self) -> OpCounts {
        self.ops
            .iter()
            .fold(OpCounts::default(), |mut counts, op| {
                match op {
                    EditOp::Match { .. } => counts.matched += 1,
                    EditOp::Delete(_) => counts.deleted += 1,
                    EditOp::Insert(_) => counts.inserted += 1,
                }
                counts
            })
    }

    /// Replay matches and deletes in order; yields the old sequence.
    pub fn old_side(&self) -> impl Iterator<Item = &T> + '_ {
        self.ops.iter().filter_map(EditOp::old_value)
    }

    /// Replay matches and inserts in order; yields the new sequence.
    pub fn new_side(&self) -> impl Iterator<Item = &T> + '_ {
        self.ops.iter().filter_map(EditOp::new_value)
    }
}

/// Compute a shortest edit script turning `old` into `new`.
///
/// Elements compare by exact equality. Where a delete and an insert meet at
/// the same point, the delete comes first.
///
/// # Errors
/// Returns [`DiffError`] only when an internal invariant breaks; every pair of
/// finite inputs, including empty ones, has a script.
pub fn diff_lines<T: PartialEq + Copy>(old: &[T], new: &[T]) -> Result<EditScript<T>, DiffError> {
    let outcome = search::shortest_edit(old, new)?;
    let ops = reconstruct::backtrack(old, new, &outcome)?;
    tracing::trace!(
        old_len = old.len(),
        new_len = new.len(),
        distance = outcome.distance,
        depths = outcome.trace.depths(),
        "edit script rebuilt"
    );
    Ok(EditScript {
        ops,
        distance: outcome.distance,
    })
}
