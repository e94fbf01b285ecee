//! Shared constants used across PlantDiff crates.

/// Default API port for the diff service.
pub const DEFAULT_PORT: u16 = 38420;

/// Default per-side line limit enforced before the engine runs.
///
/// The engine keeps every search depth for backtracking, so memory grows with
/// the square of the edit distance. Two sides of this size stay in the tens of
/// megabytes even when fully disjoint.
pub const DEFAULT_MAX_DIFF_LINES: usize = 2_000;

/// Default maximum request body accepted by the API layer.
pub const DEFAULT_MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

/// Default base URL for CLI/API clients.
pub const DEFAULT_CLI_SERVER_URL: &str = "http://localhost:38420";
