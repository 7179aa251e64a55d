//! Error types for the name resolution crate.
//!
//! This module provides:
//! - [`ResolveError`]: The usage errors surfaced to callers
//! - [`FallbackClass`]: Classification driving the registry's fallback loop
//!
//! Only usage errors cross the public boundary, and both are detected before
//! any network call. Transport and parse failures are folded into
//! [`ResolutionResult`](crate::models::ResolutionResult) variants by the
//! adapters, and an exhausted candidate list yields an empty outcome rather
//! than an error.

mod fallback;

pub use fallback::FallbackClass;

use thiserror::Error;

/// Errors that indicate a malformed request rather than a transient failure.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ResolveError {
    /// The identifier matches none of the recognized syntaxes.
    /// Detected by the validator gate before classification.
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),

    /// The identifier parses, but its suffix names no known chain or
    /// text record.
    #[error("Unrecognized suffix: {0}")]
    UnrecognizedSuffix(String),
}
