//! Core library for PlantDiff (line diff engine, split-view projection, config).

/// Bounded comparison pipeline shared by the server and CLI.
pub mod compare;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across crates.
pub mod constants;
/// Myers shortest-edit-script engine.
pub mod diff;
/// Process-global environment helpers.
pub mod env;
/// Engine and application error types.
pub mod error;
/// Request and response models.
pub mod models;
/// Prefixed column and reduced-text rendering.
pub mod render;
/// Side-by-side row projection of edit scripts.
pub mod split;
/// Line-ending normalization and splitting.
pub mod text;

pub use compare::compare;
pub use config::Config;
pub use constants::{
    DEFAULT_CLI_SERVER_URL, DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_DIFF_LINES, DEFAULT_PORT,
};
pub use diff::{diff_lines, EditOp, EditScript};
pub use error::{AppError, DiffError, InputSide};
pub use models::diff::{DiffRequest, DiffResponse, DiffStats};
pub use split::{RowKind, SplitRow};
