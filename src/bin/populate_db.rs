// ABOUTME: Demo data loader for the Octofit Tracker database
// ABOUTME: Populates accounts, teams, workouts, activities and leaderboards; --force resets first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data loader for Octofit Tracker.
//!
//! Usage:
//! ```bash
//! # Populate an empty database (skips when accounts already exist)
//! cargo run --bin populate-db
//!
//! # Wipe existing data and repopulate
//! cargo run --bin populate-db -- --force
//!
//! # Use a specific database with verbose output
//! cargo run --bin populate-db -- --database-url sqlite:./data/demo.db -v
//! ```

use anyhow::Result;
use clap::Parser;
use octofit_tracker::config::DatabaseConfig;
use octofit_tracker::database::Database;
use octofit_tracker::logging;
use octofit_tracker::seeding::{self, SeedOptions};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "populate-db",
    about = "Octofit Tracker Demo Data Loader",
    long_about = "Populate the database with demo accounts, teams, workouts, activities and leaderboards"
)]
struct PopulateArgs {
    /// Reset existing data before populating
    #[arg(long)]
    force: bool,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = PopulateArgs::parse();

    logging::init_from_env(args.verbose)?;

    info!("=== Octofit Tracker Demo Data Loader ===");

    let config = DatabaseConfig::from_env()?.with_url_override(args.database_url.as_deref())?;
    info!("Connecting to database: {}", config.url);
    let database = Database::from_config(&config).await?;

    let outcome = seeding::run(&database, SeedOptions { force: args.force }).await?;
    info!("{outcome}");

    Ok(())
}
