//! Core value types for name resolution.
//!
//! This module contains the per-request data types:
//! - `types` - Type aliases for common identifiers (ProviderId, ChainSymbol)
//! - `query` - Classified query shape (ClassifiedQuery, RequestKind, L2Network, TextRecordKind)
//! - `outcome` - Per-provider results and the orchestration outcome
//!
//! All types are immutable values created per request and discarded once the
//! caller consumes the outcome; nothing here is cached or shared.

mod outcome;
mod query;
mod types;

pub use outcome::{ResolutionOutcome, ResolutionResult};
pub use query::{ClassifiedQuery, L2Network, RequestKind, TextRecordKind};
pub use types::{ChainSymbol, ProviderId};
