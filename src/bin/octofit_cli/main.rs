// ABOUTME: Octofit CLI - management command-line tool for the Octofit Tracker database
// ABOUTME: Hosts the populate-db subcommand alongside the standalone loader binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Populate demo data when the database is empty
//! octofit-cli populate-db
//!
//! # Reset existing data and repopulate
//! octofit-cli populate-db --force
//!
//! # Target a specific database
//! octofit-cli --database-url sqlite:./data/demo.db populate-db
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use octofit_tracker::{config::DatabaseConfig, database::Database, logging};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "octofit-cli",
    about = "Octofit Tracker Management CLI",
    long_about = "Command-line tool for managing the Octofit Tracker database."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Populate the database with demo data
    PopulateDb {
        /// Reset existing data before populating
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env(cli.verbose)?;

    info!("Octofit Tracker CLI");

    let config = DatabaseConfig::from_env()?.with_url_override(cli.database_url.as_deref())?;
    info!("Connecting to database: {}", config.url);
    let database = Database::from_config(&config).await?;

    match cli.command {
        Command::PopulateDb { force } => commands::populate::run(&database, force).await?,
    }

    Ok(())
}
