// Enrich companies from their websites via Firecrawl
//
// Creates one company record per website in an in-memory store, lets the
// creation hook enrich each one, and prints a JSON report of the outcomes.

use anyhow::{Context, Result};
use clap::Parser;
use firecrawl_client::FirecrawlClient;
use serde::Serialize;
use server_core::domains::companies::{retry_failed, Company, EnrichmentWorkflow, OutcomeSummary};
use server_core::kernel::{MemoryCompanyStore, ServerDeps};
use server_core::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "enrich", about = "Enrich company records from their websites")]
struct Cli {
    /// Company websites (absolute http/https URLs)
    #[arg(required = true)]
    websites: Vec<String>,

    /// Retry failed enrichments once after the first pass
    #[arg(long)]
    retry_failed: bool,
}

#[derive(Serialize)]
struct Report {
    outcomes: Vec<OutcomeSummary>,
    retried: Vec<OutcomeSummary>,
    companies: Vec<Company>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,firecrawl_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api_url = %config.firecrawl_api_url, "Configuration loaded");

    let store = Arc::new(MemoryCompanyStore::new());
    let client = FirecrawlClient::new(config.firecrawl_config());
    let workflow = Arc::new(EnrichmentWorkflow::new(ServerDeps::with_firecrawl(
        client,
        store.clone(),
    )));
    store
        .on_record_created(workflow.clone())
        .context("Failed to register enrichment hook")?;

    let mut outcomes = Vec::new();
    for website in &cli.websites {
        match store.create(website.as_str()).await {
            Ok((_, created)) => outcomes.extend(created.iter().map(|o| o.summary())),
            Err(e) => tracing::error!(website = %website, error = %e, "Failed to create company"),
        }
    }

    let retried = if cli.retry_failed {
        retry_failed(store.as_ref(), workflow.as_ref())
            .await?
            .iter()
            .map(|o| o.summary())
            .collect()
    } else {
        Vec::new()
    };

    let report = Report {
        outcomes,
        retried,
        companies: store.all()?,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );

    Ok(())
}
