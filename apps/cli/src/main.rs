//! `drug-inventory` - maintenance commands for the drug catalog store.
//!
//! Uses the same configuration as the server (`config.toml`, `.env`,
//! `DRUG_INVENTORY__*` environment variables).

use anyhow::Context;
use clap::{Parser, Subcommand};
use drug_inventory::{
    config::{Config, StorageBackend},
    db::{self, seed, DrugFilter, DrugSort, DrugStore, SortColumn},
    logging,
    models::NewDrug,
};
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_SIZE: u64 = 5;
const COMPANY_PREVIEW: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "drug-inventory", about = "Drug inventory catalog maintenance")]
struct Cli {
    /// Database URL, overriding the configured `database.url`.
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the whole collection with a catalog.
    Seed {
        /// JSON array of drug records. Defaults to the bundled sample catalog.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the record count, a few sample records and the companies.
    Check,
    /// Connect to the store and run a liveness query.
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_simple_logging();
    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    if config.storage.backend == StorageBackend::Memory {
        tracing::warn!("storage.backend is 'memory'; changes will not outlive this command");
    }

    let store = db::open_store(&config)
        .await
        .context("Failed to open drug store")?;

    match cli.command {
        Commands::Seed { file } => seed_store(store, file).await,
        Commands::Check => check_store(store).await,
        Commands::Ping => ping_store(store).await,
    }
}

async fn seed_store(store: Arc<dyn DrugStore>, file: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog: Vec<NewDrug> = match &file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            seed::parse_catalog(&json)
                .with_context(|| format!("Invalid catalog in {}", path.display()))?
        }
        None => seed::bundled_catalog().context("Bundled catalog is invalid")?,
    };

    let inserted = store
        .replace_all(&catalog)
        .await
        .context("Failed to replace drug collection")?;
    println!("Inserted {inserted} drugs");
    Ok(())
}

async fn check_store(store: Arc<dyn DrugStore>) -> anyhow::Result<()> {
    let everything = DrugFilter::default();
    let by_code = DrugSort {
        column: SortColumn::Code,
        ascending: true,
    };

    let total = store.count(&everything).await?;
    println!("Total drugs in database: {total}");

    let sample = store.find_page(&everything, by_code, 0, SAMPLE_SIZE).await?;
    if !sample.is_empty() {
        println!("\nSample drugs:");
        for (index, drug) in sample.iter().enumerate() {
            println!(
                "{}. {} - {} ({})",
                index + 1,
                drug.generic_name,
                drug.brand_name,
                drug.company
            );
        }
    }

    let companies = store.distinct_companies().await?;
    println!("\nCompanies ({}):", companies.len());
    for company in companies.iter().take(COMPANY_PREVIEW) {
        println!("- {company}");
    }
    if companies.len() > COMPANY_PREVIEW {
        println!("... and {} more", companies.len() - COMPANY_PREVIEW);
    }

    Ok(())
}

async fn ping_store(store: Arc<dyn DrugStore>) -> anyhow::Result<()> {
    store.ping().await.context("Store did not answer")?;
    println!("Store connection OK");
    Ok(())
}
