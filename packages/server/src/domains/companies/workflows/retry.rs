//! Out-of-band retry for companies whose enrichment failed.
//!
//! Meant to be driven by an external scheduler; the enrichment workflow itself
//! never retries.

use anyhow::{Context, Result};

use super::enrichment::INVALID_WEBSITE;
use crate::domains::companies::EnrichmentOutcome;
use crate::kernel::{BaseCompanyStore, OnCompanyCreated};

/// Re-run enrichment once for every company currently flagged as failed.
///
/// Companies whose website was rejected as invalid are skipped: another attempt
/// cannot succeed until someone fixes the website.
pub async fn retry_failed(
    store: &dyn BaseCompanyStore,
    hook: &dyn OnCompanyCreated,
) -> Result<Vec<EnrichmentOutcome>> {
    let failed = store
        .failed_companies()
        .await
        .context("Failed to list companies pending enrichment retry")?;

    let (skipped, retryable): (Vec<_>, Vec<_>) = failed
        .into_iter()
        .partition(|c| c.enrichment_failure_kind() == Some(INVALID_WEBSITE));

    tracing::info!(
        count = retryable.len(),
        skipped = skipped.len(),
        "Retrying failed company enrichments"
    );

    let mut outcomes = Vec::with_capacity(retryable.len());
    for mut company in retryable {
        outcomes.push(hook.on_record_created(&mut company).await);
    }

    let recovered = outcomes.iter().filter(|o| o.is_enriched()).count();
    tracing::info!(
        recovered,
        still_failing = outcomes.len() - recovered,
        "Enrichment retry finished"
    );

    Ok(outcomes)
}
