//! Server dependencies for workflows (using traits for testability)

use async_trait::async_trait;
use firecrawl_client::{CompanyExtraction, FirecrawlClient, FirecrawlError};
use std::sync::Arc;

use crate::kernel::{BaseCompanyExtractor, BaseCompanyStore};

// =============================================================================
// FirecrawlClient Adapter (implements BaseCompanyExtractor trait)
// =============================================================================

/// Wrapper around FirecrawlClient that implements BaseCompanyExtractor trait
pub struct FirecrawlAdapter(pub FirecrawlClient);

impl FirecrawlAdapter {
    pub fn new(client: FirecrawlClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseCompanyExtractor for FirecrawlAdapter {
    async fn extract(&self, url: &str) -> Result<CompanyExtraction, FirecrawlError> {
        self.0.extract(url).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to workflows
#[derive(Clone)]
pub struct ServerDeps {
    pub extractor: Arc<dyn BaseCompanyExtractor>,
    pub store: Arc<dyn BaseCompanyStore>,
}

impl ServerDeps {
    pub fn new(extractor: Arc<dyn BaseCompanyExtractor>, store: Arc<dyn BaseCompanyStore>) -> Self {
        Self { extractor, store }
    }

    /// Production wiring: Firecrawl for extraction, the given store for persistence
    pub fn with_firecrawl(client: FirecrawlClient, store: Arc<dyn BaseCompanyStore>) -> Self {
        Self::new(Arc::new(FirecrawlAdapter::new(client)), store)
    }
}
