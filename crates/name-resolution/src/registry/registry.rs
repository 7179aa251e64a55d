//! Provider registry for orchestrating name resolution.
//!
//! The registry owns the routing policy that the rest of the crate feeds:
//! - Validation and classification gates, before any network call
//! - Candidate selection by capability and priority ordering
//! - Sequential fallback across candidates, first success wins
//! - Deadline enforcement for callers that must bound total latency

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::classifier::{classify, is_valid};
use crate::errors::{FallbackClass, ResolveError};
use crate::models::{
    ClassifiedQuery, ProviderId, RequestKind, ResolutionOutcome, ResolutionResult,
};
use crate::provider::ensdata::EnsDataProvider;
use crate::provider::fusion::FusionProvider;
use crate::provider::{NameProvider, ProviderCapabilities};

/// Provider registry for orchestrating name resolution.
///
/// Holds no per-request state: `resolve` borrows `&self` throughout, so one
/// registry serves concurrent callers without locks.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn NameProvider>>,
    /// User-configured priorities (provider id -> priority).
    /// Lower values = higher priority. If not set, falls back to the
    /// provider's default priority.
    custom_priorities: HashMap<String, i32>,
}

impl ProviderRegistry {
    /// Create a new provider registry.
    pub fn new(providers: Vec<Arc<dyn NameProvider>>) -> Self {
        Self::with_priorities(providers, HashMap::new())
    }

    /// Create a new provider registry with custom priorities.
    ///
    /// Deployments that want the flat-address upstream tried first pass it
    /// a lower value here; unlisted providers keep their default priority.
    pub fn with_priorities(
        providers: Vec<Arc<dyn NameProvider>>,
        custom_priorities: HashMap<String, i32>,
    ) -> Self {
        Self {
            providers,
            custom_priorities,
        }
    }

    /// Registry over the stock Fusion + ENSData pair.
    pub fn with_default_providers() -> Self {
        Self::new(vec![
            Arc::new(FusionProvider::new()),
            Arc::new(EnsDataProvider::new()),
        ])
    }

    /// Resolve an identifier to an address or text-record value.
    ///
    /// Only usage errors (`InvalidFormat`, `UnrecognizedSuffix`) surface as
    /// `Err`, both detected before any network call. Provider failures and
    /// exhausted candidates yield an empty outcome, indistinguishable from
    /// "not found".
    ///
    /// Candidates are tried strictly sequentially; the fallback hop starts
    /// only after the previous call fully completes, so total latency is
    /// bounded by the sum of the candidates' timeout budgets.
    pub async fn resolve(&self, text: &str) -> Result<ResolutionOutcome, ResolveError> {
        if !is_valid(text) {
            return Err(ResolveError::InvalidFormat(text.to_string()));
        }
        let query = classify(text)?;

        let candidates = self.candidates(&query);
        if candidates.is_empty() {
            warn!("no provider supports '{}'", text);
            return Ok(ResolutionOutcome::empty());
        }

        for provider in candidates {
            let provider_id: ProviderId = Cow::Borrowed(provider.id());
            debug!("resolving '{}' via provider '{}'", text, provider_id);

            match provider.resolve(&query).await {
                ResolutionResult::Success(value) => {
                    return Ok(ResolutionOutcome::found(value, provider_id));
                }
                failure => match failure.fallback_class() {
                    FallbackClass::Stop => return Ok(ResolutionOutcome::empty()),
                    FallbackClass::NextProvider => {
                        warn!(
                            "provider '{}' yielded {:?} for '{}', trying next",
                            provider_id, failure, text
                        );
                    }
                },
            }
        }

        Ok(ResolutionOutcome::empty())
    }

    /// Resolve under an externally supplied deadline.
    ///
    /// When the deadline elapses the in-flight provider call is dropped
    /// (cancelling its HTTP request) and the outcome is empty immediately;
    /// the fallback hop is not attempted.
    pub async fn resolve_with_deadline(
        &self,
        text: &str,
        deadline: Duration,
    ) -> Result<ResolutionOutcome, ResolveError> {
        match tokio::time::timeout(deadline, self.resolve(text)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    "resolution of '{}' abandoned at {}ms deadline",
                    text,
                    deadline.as_millis()
                );
                Ok(ResolutionOutcome::empty())
            }
        }
    }

    /// Get the list of registered providers.
    pub fn providers(&self) -> &[Arc<dyn NameProvider>] {
        &self.providers
    }

    /// Candidate providers for a classified query, in call order.
    ///
    /// Text records and L2 subdomain lookups are single-provider classes: a
    /// miss there is terminal, so the sorted list is truncated to its best
    /// match. Every other address lookup falls back across all capable
    /// providers.
    fn candidates(&self, query: &ClassifiedQuery) -> Vec<&Arc<dyn NameProvider>> {
        let (supports, fallback): (fn(&ProviderCapabilities) -> bool, bool) = match &query.kind {
            RequestKind::Text(_) => (|c| c.text_records, false),
            RequestKind::Address(symbol)
                if symbol.as_ref() == "eth" && query.is_l2_subdomain() =>
            {
                (|c| c.l2_subdomains, false)
            }
            RequestKind::Address(_) => (|c| c.address_records, true),
        };

        let mut providers: Vec<_> = self
            .providers
            .iter()
            .filter(|p| supports(&p.capabilities()))
            .collect();
        providers.sort_by_key(|p| self.effective_priority(p.id(), p.priority()));

        if !fallback {
            providers.truncate(1);
        }
        providers
    }

    fn effective_priority(&self, id: &str, default_priority: u8) -> i32 {
        self.custom_priorities
            .get(id)
            .copied()
            .unwrap_or(i32::from(default_priority))
    }
}
