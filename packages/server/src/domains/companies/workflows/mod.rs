pub mod enrichment;
pub mod retry;

pub use enrichment::{
    EnrichmentFailure, EnrichmentOutcome, EnrichmentState, EnrichmentWorkflow, OutcomeSummary,
};
pub use retry::retry_failed;
