//! The tie-break rule shared by the forward search and backtracking.
//!
//! Backtracking inverts the decision the search made at each depth, so both
//! passes must call [`choose_step`] with the same inputs. Any drift between two
//! copies of this rule yields scripts that do not replay to their inputs.

/// Which neighboring diagonal a path was extended from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Extended down from diagonal `k + 1`; consumes one new-side line.
    Insert,
    /// Extended right from diagonal `k - 1`; consumes one old-side line.
    Delete,
}

impl Step {
    /// Diagonal the step started from when it ends on `diagonal`.
    pub fn source_diagonal(self, diagonal: isize) -> isize {
        match self {
            Step::Insert => diagonal + 1,
            Step::Delete => diagonal - 1,
        }
    }
}

/// Decide how the furthest path on `diagonal` at `depth` was reached.
///
/// `left_x` and `right_x` are the furthest x values recorded at `depth - 1` on
/// diagonals `k - 1` and `k + 1`. `None` marks an unreachable diagonal and
/// compares below every reachable one.
///
/// Equal neighbors choose [`Step::Delete`], so at a divergence point deletions
/// are emitted before insertions.
pub fn choose_step(
    depth: usize,
    diagonal: isize,
    left_x: Option<usize>,
    right_x: Option<usize>,
) -> Step {
    let depth = depth as isize;
    if diagonal == -depth || (diagonal != depth && left_x < right_x) {
        Step::Insert
    } else {
        Step::Delete
    }
}
