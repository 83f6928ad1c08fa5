// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The enrichment workflow lives in domains/companies and uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCompanyExtractor)

use anyhow::Result;
use async_trait::async_trait;
use firecrawl_client::{CompanyExtraction, FirecrawlError};

use crate::domains::companies::{Company, CompanyId, EnrichmentOutcome};

// =============================================================================
// Extractor Trait (Infrastructure - remote web extraction)
// =============================================================================

#[async_trait]
pub trait BaseCompanyExtractor: Send + Sync {
    /// Extract a company description and product summary from a page
    async fn extract(&self, url: &str) -> std::result::Result<CompanyExtraction, FirecrawlError>;
}

// =============================================================================
// Record Store Trait (Infrastructure - external record store)
// =============================================================================

#[async_trait]
pub trait BaseCompanyStore: Send + Sync {
    /// Persist the record as it is now
    async fn save(&self, company: &Company) -> Result<()>;

    /// Flag a record whose enrichment failed so it can be retried out of band
    async fn mark_enrichment_failed(&self, id: CompanyId, reason: &str) -> Result<()>;

    /// Records currently flagged as failed
    async fn failed_companies(&self) -> Result<Vec<Company>>;
}

// =============================================================================
// Record Created Hook (port the store calls for every new company)
// =============================================================================

#[async_trait]
pub trait OnCompanyCreated: Send + Sync {
    async fn on_record_created(&self, company: &mut Company) -> EnrichmentOutcome;
}
