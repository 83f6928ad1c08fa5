use anyhow::Result;
use chrono::{DateTime, Utc};
use firecrawl_client::CompanyProfile;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed ID for company records (UUID v7, time-ordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(Uuid);

impl CompanyId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Company - a record created by the store; enrichment fills in the descriptive fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub website: String,
    pub description: String,
    pub product_summary: String,

    // Enrichment tracking
    pub enrichment_status: EnrichmentStatus,
    pub enrichment_error: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// New, not yet enriched record
    pub fn new(website: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CompanyId::new(),
            website: website.into(),
            description: String::new(),
            product_summary: String::new(),
            enrichment_status: EnrichmentStatus::Pending,
            enrichment_error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy the extracted profile onto the record and mark it enriched
    pub fn apply_profile(&mut self, profile: &CompanyProfile) {
        self.description = profile.company_description.clone();
        self.product_summary = profile.product_summary.clone();
        self.enrichment_status = EnrichmentStatus::Enriched;
        self.enrichment_error = None;
        self.updated_at = Utc::now();
    }

    /// Flag the record for out-of-band retry; descriptive fields are left alone
    pub fn mark_enrichment_failed(&mut self, reason: impl Into<String>) {
        self.enrichment_status = EnrichmentStatus::Failed;
        self.enrichment_error = Some(reason.into());
        self.updated_at = Utc::now();
    }

    /// Kind recorded with the last enrichment failure (`"<kind>: <message>"`)
    pub fn enrichment_failure_kind(&self) -> Option<&str> {
        self.enrichment_error
            .as_deref()
            .map(|e| e.split_once(':').map_or(e, |(kind, _)| kind).trim())
    }
}

/// Enrichment status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    Pending,
    Enriched,
    Failed,
}

impl std::fmt::Display for EnrichmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrichmentStatus::Pending => write!(f, "pending"),
            EnrichmentStatus::Enriched => write!(f, "enriched"),
            EnrichmentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for EnrichmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(EnrichmentStatus::Pending),
            "enriched" => Ok(EnrichmentStatus::Enriched),
            "failed" => Ok(EnrichmentStatus::Failed),
            _ => Err(anyhow::anyhow!("Invalid enrichment status: {}", s)),
        }
    }
}
