//! Name provider trait definition.
//!
//! This module defines the core `NameProvider` trait that all resolution
//! providers must implement.

use async_trait::async_trait;

use crate::models::{ClassifiedQuery, ResolutionResult};

use super::capabilities::ProviderCapabilities;

/// Trait for upstream name-resolution providers.
///
/// Implement this trait to add support for a new resolution API. The
/// registry routes queries by the provider's [`ProviderCapabilities`] and
/// orders candidates by [`priority`](Self::priority).
///
/// Adapters own all failure handling: `resolve` returns a
/// [`ResolutionResult`] for every input and must not panic on malformed
/// upstream payloads.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ensign_name_resolution::{NameProvider, ProviderCapabilities};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl NameProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities {
///             address_records: true,
///             text_records: false,
///             l2_subdomains: false,
///         }
///     }
///
///     // ... implement resolve
/// }
/// ```
#[async_trait]
pub trait NameProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "FUSION" or "ENSDATA".
    /// Used for logging, outcome attribution, and priority overrides.
    fn id(&self) -> &'static str;

    /// Provider priority for ordering.
    ///
    /// Lower values = higher priority. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Which query classes this provider can answer.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Resolve one classified query against this upstream.
    ///
    /// The call suspends exactly once, on the network round trip, and
    /// completes within the adapter's configured timeout budget.
    async fn resolve(&self, query: &ClassifiedQuery) -> ResolutionResult;
}
