//! HTTP error mapping for API handlers.

use crate::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// [`AppError`] carried out of a handler and rendered as a JSON error body.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            err @ AppError::InputTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            AppError::Diff(err) => {
                tracing::error!("Diff engine failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Diff engine failure".to_string(),
                )
            }
            AppError::Internal => {
                tracing::error!("Internal error while serving diff request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::HttpError;
    use crate::{AppError, DiffError, InputSide};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn oversized_input_maps_to_payload_too_large() {
        let response = HttpError(AppError::InputTooLarge {
            side: InputSide::New,
            lines: 12,
            limit: 10,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn engine_failures_map_to_internal_error() {
        let cases = [
            AppError::Diff(DiffError::NoPath {
                old_len: 1,
                new_len: 1,
                max_depth: 2,
            }),
            AppError::Internal,
        ];
        for err in cases {
            let response = HttpError(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
