//! Kernel module - infrastructure traits, adapters and dependencies.

pub mod company_store;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use company_store::MemoryCompanyStore;
pub use deps::{FirecrawlAdapter, ServerDeps};
pub use test_dependencies::TestDependencies;
pub use traits::*;
