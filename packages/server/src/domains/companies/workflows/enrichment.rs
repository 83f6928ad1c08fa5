//! Company enrichment workflow.
//!
//! Runs once per "company created" event on the dispatching task:
//! `Created -> Extracting -> {Enriched | Failed}`. Both end states are terminal
//! for the run; failed records are flagged in the store and picked up later by
//! [`super::retry_failed`].

use async_trait::async_trait;
use firecrawl_client::FirecrawlError;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::domains::companies::{Company, CompanyId};
use crate::kernel::{OnCompanyCreated, ServerDeps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentState {
    Created,
    Extracting,
    Enriched,
    Failed,
}

impl EnrichmentState {
    pub fn can_transition_to(self, next: EnrichmentState) -> bool {
        use EnrichmentState::*;
        matches!(
            (self, next),
            (Created, Extracting) | (Extracting, Enriched) | (Extracting, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, EnrichmentState::Enriched | EnrichmentState::Failed)
    }
}

/// Failure kind for websites that can never be extracted; not worth retrying.
pub const INVALID_WEBSITE: &str = "invalid_website";

/// Why a single record could not be enriched
#[derive(Debug, Error)]
pub enum EnrichmentFailure {
    #[error("invalid website {website:?}: {reason}")]
    InvalidWebsite { website: String, reason: String },

    #[error("extraction failed: {0}")]
    Extraction(#[from] FirecrawlError),

    #[error("failed to save enriched company: {0:#}")]
    Persistence(anyhow::Error),
}

impl EnrichmentFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            EnrichmentFailure::InvalidWebsite { .. } => INVALID_WEBSITE,
            EnrichmentFailure::Extraction(e) => e.kind(),
            EnrichmentFailure::Persistence(_) => "persistence",
        }
    }
}

/// Result of one enrichment run, reported back to whoever dispatched the event
#[derive(Debug)]
pub enum EnrichmentOutcome {
    Enriched {
        company_id: CompanyId,
    },
    Failed {
        company_id: CompanyId,
        reason: EnrichmentFailure,
    },
}

impl EnrichmentOutcome {
    pub fn company_id(&self) -> CompanyId {
        match self {
            EnrichmentOutcome::Enriched { company_id } => *company_id,
            EnrichmentOutcome::Failed { company_id, .. } => *company_id,
        }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, EnrichmentOutcome::Enriched { .. })
    }

    pub fn failure(&self) -> Option<&EnrichmentFailure> {
        match self {
            EnrichmentOutcome::Enriched { .. } => None,
            EnrichmentOutcome::Failed { reason, .. } => Some(reason),
        }
    }

    pub fn summary(&self) -> OutcomeSummary {
        match self {
            EnrichmentOutcome::Enriched { company_id } => OutcomeSummary {
                company_id: *company_id,
                status: EnrichmentState::Enriched,
                failure_kind: None,
                reason: None,
            },
            EnrichmentOutcome::Failed { company_id, reason } => OutcomeSummary {
                company_id: *company_id,
                status: EnrichmentState::Failed,
                failure_kind: Some(reason.kind()),
                reason: Some(reason.to_string()),
            },
        }
    }
}

/// Serializable view of an [`EnrichmentOutcome`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeSummary {
    pub company_id: CompanyId,
    pub status: EnrichmentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Accept only absolute http(s) URLs with a host.
pub fn validate_website(website: &str) -> Result<Url, EnrichmentFailure> {
    let invalid = |reason: String| EnrichmentFailure::InvalidWebsite {
        website: website.to_string(),
        reason,
    };

    let url = Url::parse(website.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme: {}", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}

struct EnrichmentRun {
    company_id: CompanyId,
    state: EnrichmentState,
}

impl EnrichmentRun {
    fn new(company_id: CompanyId) -> Self {
        Self {
            company_id,
            state: EnrichmentState::Created,
        }
    }

    fn advance(&mut self, next: EnrichmentState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal enrichment transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(
            company_id = %self.company_id,
            from = ?self.state,
            to = ?next,
            "Enrichment state transition"
        );
        self.state = next;
    }
}

pub struct EnrichmentWorkflow {
    deps: ServerDeps,
}

impl EnrichmentWorkflow {
    pub fn new(deps: ServerDeps) -> Self {
        Self { deps }
    }

    /// Enrich one freshly created company.
    ///
    /// On success the record carries the extracted description and product
    /// summary and has been saved exactly once. On failure the record is left
    /// as it was, save is not called, and the store is asked to flag it.
    pub async fn enrich(&self, company: &mut Company) -> EnrichmentOutcome {
        let company_id = company.id;
        let mut run = EnrichmentRun::new(company_id);
        run.advance(EnrichmentState::Extracting);

        match self.extract_and_save(company).await {
            Ok(()) => {
                run.advance(EnrichmentState::Enriched);
                tracing::info!(company_id = %company_id, website = %company.website, "Company enriched");
                EnrichmentOutcome::Enriched { company_id }
            }
            Err(reason) => {
                run.advance(EnrichmentState::Failed);
                self.record_failure(company, &reason).await;
                EnrichmentOutcome::Failed { company_id, reason }
            }
        }
    }

    async fn extract_and_save(&self, company: &mut Company) -> Result<(), EnrichmentFailure> {
        validate_website(&company.website)?;

        let extraction = self.deps.extractor.extract(company.website.trim()).await?;

        let previous = company.clone();
        company.apply_profile(&extraction.profile);

        if let Err(e) = self.deps.store.save(company).await {
            *company = previous;
            return Err(EnrichmentFailure::Persistence(e));
        }

        Ok(())
    }

    async fn record_failure(&self, company: &Company, reason: &EnrichmentFailure) {
        tracing::warn!(
            company_id = %company.id,
            website = %company.website,
            kind = reason.kind(),
            error = %reason,
            "Company enrichment failed"
        );

        let stored_reason = format!("{}: {}", reason.kind(), reason);
        if let Err(e) = self
            .deps
            .store
            .mark_enrichment_failed(company.id, &stored_reason)
            .await
        {
            tracing::error!(
                company_id = %company.id,
                error = %e,
                "Failed to flag company for enrichment retry"
            );
        }
    }
}

#[async_trait]
impl OnCompanyCreated for EnrichmentWorkflow {
    async fn on_record_created(&self, company: &mut Company) -> EnrichmentOutcome {
        self.enrich(company).await
    }
}
