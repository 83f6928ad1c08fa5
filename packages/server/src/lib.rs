// Company enrichment - API Core
//
// Enriches newly created company records with a description and product summary
// extracted from their website by Firecrawl.
//
// Infrastructure (service traits, adapters, the in-memory store) lives in kernel/;
// the companies domain owns the record model and the enrichment workflows.

pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
