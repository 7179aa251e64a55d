//! Fusion resolution provider implementation.
//!
//! The richer of the two stock upstreams: chain address records plus text
//! records. It does not understand L2 subdomain deployments.
//!
//! # API Endpoints
//!
//! - Resolve: `GET {base_url}/resolve/{identifier}`
//!
//! The identifier is the plain ENS name for `eth` lookups
//! (`vitalik.eth`) and the colon form for everything else
//! (`onshow.eth:btc`, `bob.eth:x`).
//!
//! # Response Format
//!
//! A top-level boolean `success` and, on `true`, a nested `data` object
//! whose `address` field carries the resolved value for address and
//! text-record queries alike.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::models::{ClassifiedQuery, ResolutionResult};
use crate::provider::{HttpSettings, NameProvider, ProviderCapabilities};

const BASE_URL: &str = "https://api.fusionens.com";
const PROVIDER_ID: &str = "FUSION";

/// Envelope returned by the resolve endpoint.
#[derive(Debug, Deserialize)]
struct ResolveResponse {
    success: bool,
    #[serde(default)]
    data: Option<ResolveData>,
}

#[derive(Debug, Deserialize)]
struct ResolveData {
    #[serde(default)]
    address: Option<String>,
}

/// Fusion name provider.
pub struct FusionProvider {
    client: Client,
    base_url: String,
}

impl FusionProvider {
    /// Create a provider against the public Fusion endpoint.
    pub fn new() -> Self {
        Self::with_settings(HttpSettings::new(BASE_URL))
    }

    /// Create a provider with a custom base URL and timeout budget.
    pub fn with_settings(settings: HttpSettings) -> Self {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: settings.base_url,
        }
    }

    /// Fold a response body into a result. Missing `data`, a missing or
    /// empty `address`, and `success: false` are all an empty result;
    /// only undecodable JSON is a parse error.
    fn decode(body: &str) -> ResolutionResult {
        let response: ResolveResponse = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(e) => return ResolutionResult::ParseError(e.to_string()),
        };

        if !response.success {
            return ResolutionResult::Empty;
        }

        match response
            .data
            .and_then(|d| d.address)
            .filter(|a| !a.is_empty())
        {
            Some(address) => ResolutionResult::Success(address),
            None => ResolutionResult::Empty,
        }
    }
}

impl Default for FusionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameProvider for FusionProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            address_records: true,
            text_records: true,
            l2_subdomains: false,
        }
    }

    async fn resolve(&self, query: &ClassifiedQuery) -> ResolutionResult {
        let identifier = query.provider_query();
        let url = format!("{}/resolve/{}", self.base_url, encode(&identifier));
        debug!("resolving '{}' via {}", identifier, PROVIDER_ID);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("{} request failed for '{}': {}", PROVIDER_ID, identifier, e);
                return ResolutionResult::TransportError(e.to_string());
            }
        };

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return ResolutionResult::Empty;
        }
        if !response.status().is_success() {
            return ResolutionResult::TransportError(format!(
                "HTTP error: {}",
                response.status()
            ));
        }

        match response.text().await {
            Ok(body) => Self::decode(&body),
            Err(e) => ResolutionResult::TransportError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let body = r#"{"success": true, "data": {"address": "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"}}"#;
        assert_eq!(
            FusionProvider::decode(body),
            ResolutionResult::Success("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string())
        );
    }

    #[test]
    fn test_decode_success_false_is_empty() {
        let body = r#"{"success": false}"#;
        assert_eq!(FusionProvider::decode(body), ResolutionResult::Empty);
    }

    #[test]
    fn test_decode_missing_data_is_empty() {
        assert_eq!(
            FusionProvider::decode(r#"{"success": true}"#),
            ResolutionResult::Empty
        );
        assert_eq!(
            FusionProvider::decode(r#"{"success": true, "data": {}}"#),
            ResolutionResult::Empty
        );
        assert_eq!(
            FusionProvider::decode(r#"{"success": true, "data": {"address": ""}}"#),
            ResolutionResult::Empty
        );
    }

    #[test]
    fn test_decode_malformed_json_is_parse_error() {
        assert!(matches!(
            FusionProvider::decode("not json at all"),
            ResolutionResult::ParseError(_)
        ));
        // A shape without the `success` field is malformed for this upstream
        assert!(matches!(
            FusionProvider::decode(r#"{"address": "0x1"}"#),
            ResolutionResult::ParseError(_)
        ));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{"success": true, "data": {"address": "0x1", "name": "x"}, "ttl": 300}"#;
        assert_eq!(
            FusionProvider::decode(body),
            ResolutionResult::Success("0x1".to_string())
        );
    }
}
