//! Provider capabilities and HTTP settings.
//!
//! This module defines structures describing which query classes a provider
//! can answer and how its HTTP client is budgeted.

use std::time::Duration;

/// Describes which query classes a provider can answer.
///
/// The registry routes on these flags: text records and L2 subdomain
/// lookups only reach providers that declare support for them.
#[derive(Clone, Copy, Debug)]
pub struct ProviderCapabilities {
    /// Can resolve chain address records (`eth` and other chain symbols).
    pub address_records: bool,

    /// Can resolve text records (social handles, bio, avatar, ...).
    pub text_records: bool,

    /// Understands L2 subdomain names (`*.base.eth` and friends).
    pub l2_subdomains: bool,
}

/// HTTP settings for one provider.
///
/// Both timeouts are independently configurable; either one elapsing
/// surfaces as a transport error, never as an empty-string success.
#[derive(Clone, Debug)]
pub struct HttpSettings {
    /// Base URL of the upstream API, overridable for tests or self-hosting.
    pub base_url: String,

    /// TCP/TLS handshake budget.
    pub connect_timeout: Duration,

    /// Total response budget, handshake included.
    pub request_timeout: Duration,
}

impl HttpSettings {
    /// Settings for the given base URL with the default timeout budget
    /// (3 s connect, 5 s total).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(5),
        }
    }
}
