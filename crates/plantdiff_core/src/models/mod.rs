//! Data models for API requests and responses.

/// Diff request/response payloads.
pub mod diff;
