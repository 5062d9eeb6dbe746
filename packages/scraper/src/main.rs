// Entry point for the careers scraper

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ibps_scraper::{ScrapePipeline, ScraperConfig, WeeklySchedule};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ibps-scraper")]
#[command(about = "Scrape IBPS career postings into CSV/JSON snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape once and exit (default)
    Once,

    /// Scrape on the configured weekly schedule until interrupted
    Weekly,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ibps_scraper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ScraperConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(
        base_url = %config.base_url,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let pipeline = Arc::new(ScrapePipeline::new(config).context("Failed to build pipeline")?);

    match cli.command.unwrap_or(Commands::Once) {
        Commands::Once => {
            let report = pipeline.run_once().await.context("Scrape run failed")?;
            tracing::info!(postings = report.postings.len(), "Scrape complete");
        }
        Commands::Weekly => {
            let mut schedule = WeeklySchedule::start(pipeline.clone())
                .await
                .context("Failed to start scheduler")?;

            if let Some(next) = schedule.next_run().await? {
                tracing::info!("Next scrape at {}", next.with_timezone(&chrono::Local));
            }

            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for shutdown signal")?;

            tracing::info!("Shutdown signal received");
            schedule.stop().await?;
        }
    }

    Ok(())
}
