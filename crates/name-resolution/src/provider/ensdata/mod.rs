//! ENSData resolution provider implementation.
//!
//! Flat-address upstream: chain address records only, including names on L2
//! subdomain deployments (`*.base.eth` and friends), which it resolves
//! natively. No text-record support.
//!
//! # API Endpoints
//!
//! - Resolve: `GET {base_url}/{identifier}`
//!
//! # Response Format
//!
//! A top-level string `address`; older deployments return the same value
//! under `result`. Both absent or null means the name has no record.

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::models::{ClassifiedQuery, ResolutionResult};
use crate::provider::{HttpSettings, NameProvider, ProviderCapabilities};

const BASE_URL: &str = "https://ensdata.net";
const PROVIDER_ID: &str = "ENSDATA";

/// Flat response from the resolve endpoint.
#[derive(Debug, Deserialize)]
struct AddressResponse {
    #[serde(default)]
    address: Option<String>,
    /// Legacy field name still served by older deployments.
    #[serde(default)]
    result: Option<String>,
}

/// ENSData name provider.
pub struct EnsDataProvider {
    client: Client,
    base_url: String,
}

impl EnsDataProvider {
    /// Create a provider against the public ENSData endpoint.
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

    fn decode(body: &str) -> ResolutionResult {
        let response: AddressResponse = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(e) => return ResolutionResult::ParseError(e.to_string()),
        };

        match response
            .address
            .or(response.result)
            .filter(|a| !a.is_empty())
        {
            Some(address) => ResolutionResult::Success(address),
            None => ResolutionResult::Empty,
        }
    }
}

impl Default for EnsDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameProvider for EnsDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        2
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            address_records: true,
            text_records: false,
            l2_subdomains: true,
        }
    }

    async fn resolve(&self, query: &ClassifiedQuery) -> ResolutionResult {
        let identifier = query.provider_query();
        let url = format!("{}/{}", self.base_url, encode(&identifier));

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
