//! Diff HTTP handlers.

use crate::{compare, error::HttpError, AppError, AppState, DiffRequest, DiffResponse};
use axum::{extract::State, Json};

// The search is CPU-bound and uninterruptible; keep it off the async workers.
async fn compare_blocking(
    state: &AppState,
    request: DiffRequest,
) -> Result<DiffResponse, AppError> {
    let max_lines = state.config.max_lines;
    tokio::task::spawn_blocking(move || compare(&request, max_lines))
        .await
        .map_err(|err| {
            tracing::error!("Diff task did not complete: {}", err);
            AppError::Internal
        })?
}

/// Diff two diagram sources into split rows.
///
/// # Arguments
/// - `state`: Application state.
/// - `req`: Old and new sources.
///
/// # Returns
/// Rows, reduced text, distance, and totals as JSON.
///
/// # Errors
/// Returns `413` when a side exceeds the configured line limit and `500` on
/// engine failure.
pub async fn create_diff(
    State(state): State<AppState>,
    Json(req): Json<DiffRequest>,
) -> Result<Json<DiffResponse>, HttpError> {
    let response = compare_blocking(&state, req).await?;
    Ok(Json(response))
}

/// Diff two diagram sources and return only the reduced text.
///
/// The `text/plain` body is the new-side text of every row joined by `\n`,
/// ready for an external diagram renderer.
///
/// # Errors
/// Same as [`create_diff`].
pub async fn create_reduced(
    State(state): State<AppState>,
    Json(req): Json<DiffRequest>,
) -> Result<String, HttpError> {
    let response = compare_blocking(&state, req).await?;
    Ok(response.reduced)
}
