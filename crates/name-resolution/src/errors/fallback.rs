//! Fallback classification for provider results.

/// What the registry does after a provider call completes.
///
/// Derived from each [`ResolutionResult`](crate::models::ResolutionResult)
/// via its `fallback_class` method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FallbackClass {
    /// Use this result; do not call further providers.
    Stop,
    /// Try the next provider in the ordered candidate list.
    NextProvider,
}
