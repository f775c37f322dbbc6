//! Holocron main entry point
//!
//! This is the command-line interface for the Holocron character ingester.

use clap::Parser;
use holocron::config::{load_config, Config};
use holocron::storage::{open_storage, Storage};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Holocron: a SWAPI character ingestion tool
///
/// Holocron fetches every character record from a SWAPI-style API, resolves
/// their films, species, starships, vehicles, and homeworld into readable
/// values, and bulk-inserts the enriched rows into SQLite.
#[derive(Parser, Debug)]
#[command(name = "holocron")]
#[command(version)]
#[command(about = "A SWAPI character ingestion tool", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show statistics from the database and exit
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_ingest(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("holocron=info,warn"),
            1 => EnvFilter::new("holocron=debug,info"),
            2 => EnvFilter::new("holocron=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.output.database_path);

    let storage = open_storage(Path::new(&config.output.database_path))?;
    let count = storage.count_characters()?;

    println!("Persisted characters: {}", count);

    Ok(())
}

/// Handles the main ingest operation
async fn handle_ingest(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Ingesting from: {}", config.api.base_url);

    // Reset the schema so this run starts from an empty table; inserts
    // never upsert, so a leftover table would fail on the first id.
    {
        let mut storage = open_storage(Path::new(&config.output.database_path))?;
        storage.reset_schema()?;
    }

    let start = std::time::Instant::now();
    let count = match holocron::ingest::ingest(config).await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Ingest failed: {}", e);
            return Err(e.into());
        }
    };

    println!("✓ Ingested {} characters in {:.2?}", count, start.elapsed());

    Ok(())
}
