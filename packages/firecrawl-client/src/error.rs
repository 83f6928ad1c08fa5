//! Typed errors for the Firecrawl client.
//!
//! Every failure of a single `extract` call maps to exactly one variant.
//! The client never recovers any of them locally.

use thiserror::Error;

/// Result type for Firecrawl client operations.
pub type Result<T> = std::result::Result<T, FirecrawlError>;

#[derive(Debug, Error)]
pub enum FirecrawlError {
    /// Serializing the outbound request body failed
    #[error("failed to build scrape request: {0}")]
    RequestBuild(#[source] serde_json::Error),

    /// Connection failed, or the response body could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not JSON or does not match the expected shape
    #[error("failed to decode scrape response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with `success: false`
    #[error("extraction denied (HTTP {status}): {}", .message.as_deref().unwrap_or("no reason given"))]
    ExtractionDenied {
        status: u16,
        message: Option<String>,
    },

    /// `success: true`, but a required extracted field is missing or empty
    #[error("incomplete extraction: {field} missing or empty")]
    IncompleteExtraction { field: &'static str },
}

impl FirecrawlError {
    /// Short machine-readable name, used for logging and stored failure reasons.
    pub fn kind(&self) -> &'static str {
        match self {
            FirecrawlError::RequestBuild(_) => "request_build",
            FirecrawlError::Transport(_) => "transport",
            FirecrawlError::Decode { .. } => "decode",
            FirecrawlError::ExtractionDenied { .. } => "extraction_denied",
            FirecrawlError::IncompleteExtraction { .. } => "incomplete_extraction",
        }
    }
}
