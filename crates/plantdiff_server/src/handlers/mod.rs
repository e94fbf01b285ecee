//! HTTP request handlers.

/// Diff endpoints.
pub mod diff;
