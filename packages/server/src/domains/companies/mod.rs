//! Companies domain - company records and their website-driven enrichment

pub mod models;
pub mod workflows;

pub use models::{Company, CompanyId, EnrichmentStatus};
pub use workflows::{
    retry_failed, EnrichmentFailure, EnrichmentOutcome, EnrichmentState, EnrichmentWorkflow,
    OutcomeSummary,
};
