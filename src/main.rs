//! Command-line interface for ecosystem-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed 1000 contacts into PostgreSQL
//! ecosystem-seed seed --db postgres --type contacts
//!
//! # Normalized invoices into MySQL, replacing earlier data, reproducibly
//! ecosystem-seed seed --db mysql --type invoices --normalize --clear --seed 7
//!
//! # Products into Elasticsearch with a custom window
//! ecosystem-seed seed --db es --type products --start 2024-01-01 --end 2024-06-30
//!
//! # Discover what is available
//! ecosystem-seed schemas
//! ecosystem-seed backends
//! ecosystem-seed health --db duckdb
//! ```

use clap::{Parser, Subcommand};
use ecosystem_seed::backends::{BackendConfig, BackendKind};
use ecosystem_seed::seed::{run_seed, ConsoleProgress, SeedRequest, DEFAULT_BATCH_SIZE, DEFAULT_COUNT};
use seed_core::registry::list_schemas;

#[derive(Parser)]
#[command(name = "ecosystem-seed")]
#[command(about = "Seed demo data into PostgreSQL, MySQL, Elasticsearch and DuckDB")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records and insert them into a backend
    Seed {
        /// Target backend (postgres, mysql, elasticsearch, duckdb or an alias)
        #[arg(long)]
        db: String,

        /// Schema to generate
        #[arg(long = "type", value_name = "SCHEMA")]
        schema: String,

        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Records per insert batch
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Earliest timestamp date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Latest timestamp date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Split customers and products into their own tables
        #[arg(long)]
        normalize: bool,

        /// Drop the target tables before seeding
        #[arg(long)]
        clear: bool,

        /// Seed for reproducible data (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Backend connection options
        #[command(flatten)]
        backends: BackendConfig,
    },

    /// List the available schemas
    Schemas,

    /// List the available backends
    Backends,

    /// Check whether a backend is reachable
    Health {
        /// Backend to check
        #[arg(long)]
        db: String,

        /// Backend connection options
        #[command(flatten)]
        backends: BackendConfig,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ecosystem_seed=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed {
            db,
            schema,
            count,
            batch_size,
            start,
            end,
            normalize,
            clear,
            seed,
            backends,
        } => {
            let request = SeedRequest {
                schema,
                backend: db,
                count,
                batch_size,
                start,
                end,
                normalize,
                clear,
                seed,
            };
            let mut progress = ConsoleProgress::new(request.schema.clone());
            let report = run_seed(&request, &backends, &mut progress).await?;
            println!("\n{report}");
        }
        Commands::Schemas => {
            println!("Available schemas:");
            for (name, description) in list_schemas() {
                println!("  {name:<22} {description}");
            }
        }
        Commands::Backends => {
            println!("Available backends:");
            for kind in BackendKind::ALL {
                let aliases = if kind.aliases().is_empty() {
                    "-".to_string()
                } else {
                    kind.aliases().join(", ")
                };
                let normalization = if kind.supports_normalization() {
                    "yes"
                } else {
                    "no"
                };
                println!(
                    "  {:<15} aliases: {aliases:<18} normalization: {normalization}",
                    kind.name()
                );
            }
        }
        Commands::Health { db, backends } => {
            let kind = BackendKind::resolve(&db)?;
            let mut backend = backends.create(kind);
            if backend.is_healthy().await {
                println!("{kind}: healthy");
            } else {
                println!("{kind}: unhealthy");
                anyhow::bail!("{kind} is not reachable");
            }
        }
    }

    Ok(())
}
