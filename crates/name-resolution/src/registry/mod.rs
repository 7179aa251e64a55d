//! Provider registry module.
//!
//! This module provides orchestration for name resolution providers,
//! including:
//! - Capability-based routing (text records and L2 lookups reach only
//!   providers that support them)
//! - Priority ordering with user-configurable overrides
//! - Sequential fallback, first success wins
//! - Deadline enforcement for latency-bounded callers

mod registry;

pub use registry::ProviderRegistry;
