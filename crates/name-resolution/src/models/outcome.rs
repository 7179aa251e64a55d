//! Per-provider results and the final orchestration outcome.

use crate::errors::FallbackClass;

use super::types::ProviderId;

/// Outcome of a single provider call.
///
/// Adapters fold every upstream failure mode into one of these variants;
/// nothing crosses the adapter boundary as a panic or error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolutionResult {
    /// The provider returned a usable value (address or text-record value).
    Success(String),
    /// The provider answered, but holds no record for the query.
    Empty,
    /// Network, TLS, timeout, or HTTP-level failure.
    TransportError(String),
    /// The response body decoded to an unexpected shape.
    ParseError(String),
}

impl ResolutionResult {
    /// Whether this result carries a resolved value.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// How the registry should proceed after this result.
    ///
    /// A success terminates the provider loop; every failure variant hands
    /// the query to the next candidate (when the routing class allows one).
    pub fn fallback_class(&self) -> FallbackClass {
        match self {
            Self::Success(_) => FallbackClass::Stop,
            Self::Empty | Self::TransportError(_) | Self::ParseError(_) => {
                FallbackClass::NextProvider
            }
        }
    }
}

/// Final outcome of orchestrated resolution.
///
/// Empty when every attempted provider failed or held no record; callers
/// see no difference between the two.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolutionOutcome {
    /// Resolved address or text-record value.
    pub value: Option<String>,
    /// Provider that produced the value.
    pub source: Option<ProviderId>,
}

impl ResolutionOutcome {
    /// Outcome carrying a resolved value and its source provider.
    pub fn found(value: impl Into<String>, source: impl Into<ProviderId>) -> Self {
        Self {
            value: Some(value.into()),
            source: Some(source.into()),
        }
    }

    /// Outcome with no resolved value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether resolution produced no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_stops_the_loop() {
        let result = ResolutionResult::Success("0xABC".to_string());
        assert!(result.is_success());
        assert_eq!(result.fallback_class(), FallbackClass::Stop);
    }

    #[test]
    fn test_empty_tries_next_provider() {
        assert_eq!(
            ResolutionResult::Empty.fallback_class(),
            FallbackClass::NextProvider
        );
    }

    #[test]
    fn test_transport_error_tries_next_provider() {
        let result = ResolutionResult::TransportError("connection refused".to_string());
        assert_eq!(result.fallback_class(), FallbackClass::NextProvider);
    }

    #[test]
    fn test_parse_error_tries_next_provider() {
        let result = ResolutionResult::ParseError("missing field".to_string());
        assert_eq!(result.fallback_class(), FallbackClass::NextProvider);
    }

    #[test]
    fn test_outcome_constructors() {
        let outcome = ResolutionOutcome::found("0x1", "FUSION");
        assert!(!outcome.is_empty());
        assert_eq!(outcome.value.as_deref(), Some("0x1"));
        assert_eq!(outcome.source.as_deref(), Some("FUSION"));

        assert!(ResolutionOutcome::empty().is_empty());
        assert_eq!(ResolutionOutcome::empty().source, None);
    }
}
