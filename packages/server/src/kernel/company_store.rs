//! In-memory company store for development and tests.
//!
//! Stands in for the external record store: it creates records, runs the
//! creation hooks on the caller's task, and answers the `BaseCompanyStore` port.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domains::companies::workflows::enrichment::validate_website;
use crate::domains::companies::{Company, CompanyId, EnrichmentOutcome, EnrichmentStatus};
use crate::kernel::{BaseCompanyStore, OnCompanyCreated};

pub struct MemoryCompanyStore {
    companies: RwLock<HashMap<CompanyId, Company>>,
    hooks: RwLock<Vec<Arc<dyn OnCompanyCreated>>>,
}

impl Default for MemoryCompanyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self {
            companies: RwLock::new(HashMap::new()),
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Register a hook that runs after every successful create
    pub fn on_record_created(&self, hook: Arc<dyn OnCompanyCreated>) -> Result<()> {
        self.hooks
            .write()
            .map_err(|_| anyhow!("company store hooks lock poisoned"))?
            .push(hook);
        Ok(())
    }

    /// Insert a new company, then dispatch the creation hooks sequentially.
    ///
    /// `website` is required and must be an absolute http(s) URL; hook outcomes
    /// are returned in registration order.
    pub async fn create(
        &self,
        website: impl Into<String>,
    ) -> Result<(Company, Vec<EnrichmentOutcome>)> {
        let website = website.into();
        if website.trim().is_empty() {
            bail!("website is required");
        }
        validate_website(&website)?;

        let mut company = Company::new(website);
        self.insert(company.clone())?;
        tracing::debug!(company_id = %company.id, website = %company.website, "Company created");

        let hooks = self
            .hooks
            .read()
            .map_err(|_| anyhow!("company store hooks lock poisoned"))?
            .clone();

        let mut outcomes = Vec::with_capacity(hooks.len());
        for hook in hooks {
            outcomes.push(hook.on_record_created(&mut company).await);
        }

        let company = self.get(company.id)?.unwrap_or(company);
        Ok((company, outcomes))
    }

    pub fn get(&self, id: CompanyId) -> Result<Option<Company>> {
        Ok(self
            .companies
            .read()
            .map_err(|_| anyhow!("company store lock poisoned"))?
            .get(&id)
            .cloned())
    }

    pub fn all(&self) -> Result<Vec<Company>> {
        let mut companies: Vec<Company> = self
            .companies
            .read()
            .map_err(|_| anyhow!("company store lock poisoned"))?
            .values()
            .cloned()
            .collect();
        companies.sort_by_key(|c| c.id);
        Ok(companies)
    }

    fn insert(&self, company: Company) -> Result<()> {
        self.companies
            .write()
            .map_err(|_| anyhow!("company store lock poisoned"))?
            .insert(company.id, company);
        Ok(())
    }
}

#[async_trait]
impl BaseCompanyStore for MemoryCompanyStore {
    async fn save(&self, company: &Company) -> Result<()> {
        let mut companies = self
            .companies
            .write()
            .map_err(|_| anyhow!("company store lock poisoned"))?;
        if !companies.contains_key(&company.id) {
            bail!("company not found: {}", company.id);
        }
        companies.insert(company.id, company.clone());
        Ok(())
    }

    async fn mark_enrichment_failed(&self, id: CompanyId, reason: &str) -> Result<()> {
        let mut companies = self
            .companies
            .write()
            .map_err(|_| anyhow!("company store lock poisoned"))?;
        let company = companies
            .get_mut(&id)
            .ok_or_else(|| anyhow!("company not found: {}", id))?;
        company.mark_enrichment_failed(reason);
        Ok(())
    }

    async fn failed_companies(&self) -> Result<Vec<Company>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|c| c.enrichment_status == EnrichmentStatus::Failed)
            .collect())
    }
}
