//! Pure Firecrawl REST API client.
//!
//! A minimal client for Firecrawl's `/v1/scrape` endpoint, used in `extract`
//! mode with a fixed schema to pull a company description and a product summary
//! out of a web page.
//!
//! # Example
//!
//! ```rust,ignore
//! use firecrawl_client::{FirecrawlClient, FirecrawlConfig};
//!
//! let client = FirecrawlClient::new(FirecrawlConfig::new("fc-..."));
//!
//! let extraction = client.extract("https://acme.test").await?;
//! println!("{}", extraction.profile.company_description);
//! ```

pub mod credentials;
pub mod error;
pub mod schema;
pub mod types;

pub use credentials::{ApiKey, FirecrawlConfig, DEFAULT_API_URL};
pub use error::{FirecrawlError, Result};
pub use schema::{extraction_contract, ExtractOptions, ExtractSchema, EXTRACTED_FIELDS};
pub use types::{
    CompanyExtraction, CompanyProfile, DocumentMetadata, ExtractedFields, ScrapeRequest,
    ScrapeResponse,
};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

/// Firecrawl client. Holds only immutable configuration, so clones can be
/// shared freely across tasks.
#[derive(Clone, Debug)]
pub struct FirecrawlClient {
    http_client: Client,
    config: FirecrawlConfig,
}

impl FirecrawlClient {
    /// No request timeout is set: a hung service blocks the awaiting task.
    pub fn new(config: FirecrawlConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: FirecrawlConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &FirecrawlConfig {
        &self.config
    }

    /// Serialized body of the scrape request for `url`.
    pub fn scrape_request_body(url: &str) -> Result<Vec<u8>> {
        let request = ScrapeRequest::new(url, extraction_contract());
        serde_json::to_vec(&request).map_err(FirecrawlError::RequestBuild)
    }

    /// Scrape `url` in extract mode and validate the structured result.
    ///
    /// `url` is sent as-is; callers are expected to pass an absolute URL.
    /// Exactly one request is made, with no retry.
    pub async fn extract(&self, url: &str) -> Result<CompanyExtraction> {
        let body = Self::scrape_request_body(url)?;
        let endpoint = self.config.scrape_endpoint();

        tracing::debug!(url, endpoint = %endpoint, "Sending Firecrawl extract request");

        let response = self
            .http_client
            .post(&endpoint)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.config.api_key().expose()),
            )
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Firecrawl returned non-success status");
        }

        let scrape: ScrapeResponse =
            serde_json::from_slice(&bytes).map_err(|source| FirecrawlError::Decode {
                status: status.as_u16(),
                source,
            })?;

        if let Some(warning) = scrape.warning.as_ref().and_then(types::render_message) {
            tracing::warn!(url, warning = %warning, "Firecrawl scrape warning");
        }

        let extraction = scrape.into_extraction(status.as_u16())?;
        tracing::info!(url, "Firecrawl extraction completed");

        Ok(extraction)
    }
}
