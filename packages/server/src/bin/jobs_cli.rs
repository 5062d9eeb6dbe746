//! CLI for importing scraper snapshots and provisioning API users

use std::path::PathBuf;

use anyhow::{Context, Result};
use api_core::domains::auth::User;
use api_core::domains::jobs::{load_json, sync_csv, ImportSummary};
use api_core::Config;
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobs_cli")]
#[command(about = "Import IBPS job snapshots into the database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import the scraper's CSV snapshot
    Sync {
        /// Defaults to SNAPSHOT_CSV_PATH
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Import the scraper's JSON snapshot
    LoadJson {
        /// Defaults to SNAPSHOT_JSON_PATH
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Create an API user
    CreateUser { username: String, password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = get_pool(&config).await?;

    match cli.command {
        Commands::Sync { path } => {
            let path = path.unwrap_or(config.snapshot_csv_path);
            report(sync_csv(&path, &pool).await?);
        }
        Commands::LoadJson { path } => {
            let path = path.unwrap_or(config.snapshot_json_path);
            report(load_json(&path, &pool).await?);
        }
        Commands::CreateUser { username, password } => {
            let user = User::create(&username, &password, &pool).await?;
            println!("Created user {} ({})", user.username, user.id);
        }
    }

    Ok(())
}

async fn get_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}

/// A missing snapshot was already logged by the importer.
fn report(summary: Option<ImportSummary>) {
    if let Some(summary) = summary {
        println!("Imported {} new job(s)", summary.added);
    }
}
