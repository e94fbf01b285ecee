//! Backward walk over a search trace to rebuild the edit script.

use super::search::SearchOutcome;
use super::step::{choose_step, Step};
use super::EditOp;
use crate::error::DiffError;

/// Rebuild one shortest edit script from a completed search.
///
/// Starts at `(old.len(), new.len())` and, for each depth from the distance
/// down to 1, re-derives the step the search took, unwinds the snake that
/// followed it as matches, then emits that single insert or delete. Whatever
/// remains at depth 0 is the common prefix.
///
/// # Errors
/// Returns [`DiffError::MissingFrontier`] when the trace lacks a point the
/// walk needs, and [`DiffError::UnfinishedBacktrack`] when the walk does not
/// end at the origin. Either means `outcome` did not come from
/// [`shortest_edit`](super::search::shortest_edit) over the same inputs.
pub fn backtrack<T: Copy>(
    old: &[T],
    new: &[T],
    outcome: &SearchOutcome,
) -> Result<Vec<EditOp<T>>, DiffError> {
    let (mut x, mut y) = (old.len(), new.len());
    let mut ops = Vec::with_capacity(x.min(y) + outcome.distance);

    for depth in (1..=outcome.distance).rev() {
        let diagonal = x as isize - y as isize;
        let (left_x, right_x) = outcome.trace.neighbors(depth, diagonal);
        let step = choose_step(depth, diagonal, left_x, right_x);
        let prev_diagonal = step.source_diagonal(diagonal);
        let prev_x = match step {
            Step::Insert => right_x,
            Step::Delete => left_x,
        }
        .ok_or(DiffError::MissingFrontier {
            depth: depth - 1,
            diagonal: prev_diagonal,
        })?;
        let prev_y = (prev_x as isize - prev_diagonal) as usize;

        while x > prev_x && y > prev_y {
            ops.push(EditOp::Match {
                old: old[x - 1],
                new: new[y - 1],
            });
            x -= 1;
            y -= 1;
        }

        if x == prev_x {
            let Some(prev) = y.checked_sub(1) else {
                return Err(DiffError::UnfinishedBacktrack { x, y });
            };
            ops.push(EditOp::Insert(new[prev]));
            y = prev;
        } else {
            let Some(prev) = x.checked_sub(1) else {
                return Err(DiffError::UnfinishedBacktrack { x, y });
            };
            ops.push(EditOp::Delete(old[prev]));
            x = prev;
        }
    }

    while x > 0 && y > 0 {
        ops.push(EditOp::Match {
            old: old[x - 1],
            new: new[y - 1],
        });
        x -= 1;
        y -= 1;
    }

    if x != 0 || y != 0 {
        return Err(DiffError::UnfinishedBacktrack { x, y });
    }

    ops.reverse();
    Ok(ops)
}
