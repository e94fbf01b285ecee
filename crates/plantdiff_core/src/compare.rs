//! Bounded comparison pipeline shared by the server and CLI.
//!
//! The engine has no size guard of its own, so this is where input is capped
//! before any search memory is committed.

use crate::diff::diff_lines;
use crate::error::{AppError, InputSide};
use crate::models::diff::{DiffRequest, DiffResponse, DiffStats};
use crate::render::reduced_text;
use crate::split::project;
use crate::text::{normalize_line_endings, split_lines};

fn ensure_within_limit(side: InputSide, lines: usize, limit: usize) -> Result<(), AppError> {
    if limit == 0 || lines <= limit {
        return Ok(());
    }
    tracing::warn!(%side, lines, limit, "rejecting oversized diff input");
    Err(AppError::InputTooLarge { side, lines, limit })
}

/// Normalize, bound, and diff both sides of `request`.
///
/// # Arguments
/// - `request`: Old and new diagram sources.
/// - `max_lines`: Per-side line limit; `0` disables the check.
///
/// # Returns
/// Split rows, reduced text, distance, and totals for the comparison.
///
/// # Errors
/// Returns [`AppError::InputTooLarge`] when either side exceeds `max_lines`,
/// and [`AppError::Diff`] if the engine reports an internal failure.
pub fn compare(request: &DiffRequest, max_lines: usize) -> Result<DiffResponse, AppError> {
    let old_text = normalize_line_endings(&request.old);
    let new_text = normalize_line_endings(&request.new);
    let old = split_lines(&old_text);
    let new = split_lines(&new_text);
    ensure_within_limit(InputSide::Old, old.len(), max_lines)?;
    ensure_within_limit(InputSide::New, new.len(), max_lines)?;

    let script = diff_lines(&old, &new)?;
    let counts = script.counts();
    let rows = project(script.ops());
    let reduced = reduced_text(&rows);

    tracing::debug!(
        old_lines = old.len(),
        new_lines = new.len(),
        distance = script.distance(),
        "compared diagram sources"
    );

    Ok(DiffResponse {
        distance: script.distance(),
        rows,
        reduced,
        stats: DiffStats {
            old_lines: old.len(),
            new_lines: new.len(),
            matched: counts.matched,
            deleted: counts.deleted,
            inserted: counts.inserted,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::compare;
    use crate::error::{AppError, InputSide};
    use crate::models::diff::DiffRequest;
    use crate::split::RowKind;

    fn request(old: &str, new: &str) -> DiffRequest {
        DiffRequest {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    #[test]
    fn compare_mixed_line_endings_only_sees_content_changes() {
        let response = compare(
            &request("@startuml\r\nA -> B\r\nB -> C\r\n@enduml", "@startuml\nA -> B\n@enduml"),
            0,
        )
        .expect("compare");
        assert_eq!(response.distance, 1);
        assert_eq!(response.stats.old_lines, 4);
        assert_eq!(response.stats.new_lines, 3);
        assert_eq!(response.stats.deleted, 1);
        assert_eq!(response.rows[2].kind, RowKind::Delete);
        assert_eq!(response.rows[2].left, "B -> C");
        assert_eq!(response.reduced, "@startuml\nA -> B\n\n@enduml");
    }

    #[test]
    fn compare_empty_texts_yields_one_matching_empty_line() {
        let response = compare(&request("", ""), 10).expect("compare");
        assert_eq!(response.distance, 0);
        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].kind, RowKind::Match);
        assert_eq!(response.reduced, "");
    }

    #[test]
    fn compare_rejects_oversized_sides_before_diffing() {
        let err = compare(&request("a\nb\nc", "a"), 2).expect_err("too large");
        assert!(matches!(
            err,
            AppError::InputTooLarge {
                side: InputSide::Old,
                lines: 3,
                limit: 2
            }
        ));

        let err = compare(&request("a", "a\nb\nc"), 2).expect_err("too large");
        assert!(matches!(
            err,
            AppError::InputTooLarge {
                side: InputSide::New,
                ..
            }
        ));
    }

    #[test]
    fn compare_accepts_input_at_the_limit() {
        let response = compare(&request("a\nb", "b\nc"), 2).expect("compare");
        assert_eq!(response.distance, 2);
        assert_eq!(response.stats.matched, 1);
    }
}
