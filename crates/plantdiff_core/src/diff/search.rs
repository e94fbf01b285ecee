//! Forward Myers search for the shortest edit distance.

use super::step::{choose_step, Step};
use super::trace::Trace;
use crate::error::DiffError;

/// Result of the forward search: the minimal edit distance and every depth's
/// furthest points needed to rebuild one shortest script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub distance: usize,
    pub trace: Trace,
}

/// Run the forward search over `old` and `new`.
///
/// Depth `d` explores diagonals `-d..=d` in steps of two, extending each
/// chosen point through the longest run of equal elements. The search stops
/// at the first depth where some path reaches `(old.len(), new.len())`.
///
/// Costs `O((N + M) * D)` time and retains `O(D^2)` points. There is no size
/// guard here; callers bound their input first.
///
/// # Errors
/// Returns [`DiffError::NoPath`] if no path is found within `N + M` depths,
/// and [`DiffError::MissingFrontier`] if a neighbor point is missing. Both
/// indicate a defect, not bad input.
pub fn shortest_edit<T: PartialEq>(old: &[T], new: &[T]) -> Result<SearchOutcome, DiffError> {
    let (old_len, new_len) = (old.len(), new.len());
    let max_depth = old_len + new_len;
    let mut trace = Trace::new();

    for depth in 0..=max_depth {
        trace.begin_depth();
        let signed_depth = depth as isize;

        for diagonal in (-signed_depth..=signed_depth).step_by(2) {
            let (left_x, right_x) = trace.neighbors(depth, diagonal);
            let step = choose_step(depth, diagonal, left_x, right_x);
            let start = match step {
                Step::Insert => right_x,
                Step::Delete => left_x.map(|x| x + 1),
            };
            let mut x = start.ok_or(DiffError::MissingFrontier {
                depth: depth.saturating_sub(1),
                diagonal: step.source_diagonal(diagonal),
            })?;
            // Every step keeps or advances y, so it never goes negative.
            let mut y = (x as isize - diagonal) as usize;

            while x < old_len && y < new_len && old[x] == new[y] {
                x += 1;
                y += 1;
            }
            trace.record(diagonal, x);

            if x >= old_len && y >= new_len {
                tracing::trace!(
                    distance = depth,
                    retained = trace.retained_points(),
                    "shortest edit found"
                );
                return Ok(SearchOutcome {
                    distance: depth,
                    trace,
                });
            }
        }
    }

    Err(DiffError::NoPath {
        old_len,
        new_len,
        max_depth,
    })
}
