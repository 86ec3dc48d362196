// ABOUTME: populate-db command for octofit-cli
// ABOUTME: Runs the demo data lifecycle and reports what it did
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use octofit_tracker::{
    database::Database,
    errors::AppResult,
    seeding::{self, SeedOptions},
};
use tracing::info;

type Result<T> = AppResult<T>;

/// Populate demo data, resetting first when `force` is set and data exists
pub async fn run(database: &Database, force: bool) -> Result<()> {
    info!("Populating demo data (force: {force})");

    let outcome = seeding::run(database, SeedOptions { force }).await?;
    info!("{outcome}");

    Ok(())
}
