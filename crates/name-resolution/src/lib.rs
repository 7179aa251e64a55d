//! Ensign Name Resolution Crate
//!
//! This crate resolves human-readable naming-service identifiers
//! (`vitalik.eth`, `onshow.eth:btc`, `alice.base.eth`, `someone.x`) to
//! on-chain addresses or text-record values by querying upstream resolution
//! APIs with sequential fallback.
//!
//! # Overview
//!
//! The crate supports:
//! - Address lookups on `eth` and a fixed set of other chains
//! - Text-record lookups (social handles, bio, avatar, ...)
//! - L2 subdomain names (`*.base.eth` and friends)
//! - Multiple providers with capability routing and priority ordering
//! - Bounded per-provider timeouts and an external deadline
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Identifier     | --> |    Validator     |  (syntax gate)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   Classifier     |  (canonical query shape)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Registry      |  (routing + fallback)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Fusion, ENSData)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Outcome      |  (value + source)
//!                          +------------------+
//! ```
//!
//! Resolved values feed the pure mappers in [`links`]: explorer pages for
//! addresses, destination URLs for text records.
//!
//! # Core Types
//!
//! - [`ClassifiedQuery`] - Canonical query derived from an identifier
//! - [`RequestKind`] - Address vs text-record request
//! - [`ResolutionResult`] - Outcome of one provider call
//! - [`ResolutionOutcome`] - Final outcome with source attribution
//! - [`ProviderRegistry`] - The orchestrator callers hold
//!
//! # Type Aliases
//!
//! - [`ProviderId`] - Provider identifier (e.g., "FUSION", "ENSDATA")
//! - [`ChainSymbol`] - Chain code for an address lookup (e.g., "btc")

pub mod classifier;
pub mod errors;
pub mod links;
pub mod models;
pub mod provider;
pub mod registry;

// Re-export all public types from models
pub use models::{
    ChainSymbol, ClassifiedQuery, L2Network, ProviderId, RequestKind, ResolutionOutcome,
    ResolutionResult, TextRecordKind,
};

// Re-export classifier entry points and the shared suffix tables
pub use classifier::{
    chain_symbol, classify, is_recognized_suffix, is_valid, l2_network_for, text_record_kind,
    CHAIN_SYMBOLS,
};

// Re-export link mappers
pub use links::{explorer_url, text_record_url};

// Re-export provider types
pub use provider::ensdata::EnsDataProvider;
pub use provider::fusion::FusionProvider;
pub use provider::{HttpSettings, NameProvider, ProviderCapabilities};

// Re-export registry and error types
pub use errors::{FallbackClass, ResolveError};
pub use registry::ProviderRegistry;
