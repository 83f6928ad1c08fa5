//! Connection settings for the Firecrawl client.
//!
//! The API key is held in a `secrecy` box and only leaves it when the
//! Authorization header is built.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// Firecrawl API key; prints as `[REDACTED]`.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self(SecretBox::new(value.into_boxed_str()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Immutable connection settings for [`crate::FirecrawlClient`].
#[derive(Clone)]
pub struct FirecrawlConfig {
    api_key: ApiKey,
    api_url: String,
}

impl FirecrawlConfig {
    /// Create a config pointing at the hosted Firecrawl API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    /// Create a config for a self-hosted or mock endpoint.
    /// Trailing slashes are trimmed so `{api_url}/v1/scrape` stays well-formed.
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_key: ApiKey::new(api_key),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn scrape_endpoint(&self) -> String {
        format!("{}/v1/scrape", self.api_url)
    }
}

impl fmt::Debug for FirecrawlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirecrawlConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}
