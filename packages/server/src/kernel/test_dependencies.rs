// Test doubles for kernel traits
//
// Mock services that can be injected into ServerDeps for tests.

use anyhow::{bail, Result};
use async_trait::async_trait;
use firecrawl_client::{CompanyExtraction, CompanyProfile, FirecrawlError};
use std::sync::{Arc, Mutex};

use super::{BaseCompanyExtractor, BaseCompanyStore, ServerDeps};
use crate::domains::companies::{Company, CompanyId, EnrichmentStatus};

// =============================================================================
// Mock Company Extractor
// =============================================================================

type ExtractResult = std::result::Result<CompanyExtraction, FirecrawlError>;

#[derive(Clone, Default)]
pub struct MockCompanyExtractor {
    responses: Arc<Mutex<Vec<ExtractResult>>>,
    extract_calls: Arc<Mutex<Vec<String>>>,
}

impl MockCompanyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful extraction
    pub fn with_profile(self, company_description: &str, product_summary: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(CompanyExtraction {
            metadata: None,
            profile: CompanyProfile {
                company_description: company_description.to_string(),
                product_summary: product_summary.to_string(),
            },
        }));
        self
    }

    /// Queue a failed extraction
    pub fn with_error(self, error: FirecrawlError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Get all URLs that were extracted
    pub fn extract_calls(&self) -> Vec<String> {
        self.extract_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseCompanyExtractor for MockCompanyExtractor {
    async fn extract(&self, url: &str) -> ExtractResult {
        self.extract_calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(CompanyExtraction {
                metadata: None,
                profile: CompanyProfile {
                    company_description: format!("Mock description for {}", url),
                    product_summary: "Mock products".to_string(),
                },
            })
        }
    }
}

// =============================================================================
// Spy Company Store
// =============================================================================

#[derive(Clone, Default)]
pub struct SpyCompanyStore {
    saved: Arc<Mutex<Vec<Company>>>,
    failures: Arc<Mutex<Vec<(CompanyId, String)>>>,
    fail_saves: bool,
}

impl SpyCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every save returns an error
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Snapshots of every company passed to save
    pub fn saved(&self) -> Vec<Company> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    /// (id, reason) pairs passed to mark_enrichment_failed
    pub fn failures(&self) -> Vec<(CompanyId, String)> {
        self.failures.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseCompanyStore for SpyCompanyStore {
    async fn save(&self, company: &Company) -> Result<()> {
        if self.fail_saves {
            bail!("database unavailable");
        }
        self.saved.lock().unwrap().push(company.clone());
        Ok(())
    }

    async fn mark_enrichment_failed(&self, id: CompanyId, reason: &str) -> Result<()> {
        self.failures.lock().unwrap().push((id, reason.to_string()));
        Ok(())
    }

    async fn failed_companies(&self) -> Result<Vec<Company>> {
        Ok(self
            .saved()
            .into_iter()
            .filter(|c| c.enrichment_status == EnrichmentStatus::Failed)
            .collect())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps backed by mocks
#[derive(Clone, Default)]
pub struct TestDependencies {
    pub extractor: MockCompanyExtractor,
    pub store: SpyCompanyStore,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_extractor(mut self, extractor: MockCompanyExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn spy_store(mut self, store: SpyCompanyStore) -> Self {
        self.store = store;
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            Arc::new(self.extractor.clone()),
            Arc::new(self.store.clone()),
        )
    }
}
