// ABOUTME: Demo data lifecycle for the fitness tracker: reset, populate and the skip policy
// ABOUTME: Entry points call run(), which decides between skipping, populating or resetting first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Demo Data Seeding
//!
//! `run()` checks whether any account exists:
//!
//! - none: populate the demo set
//! - some, without `force`: leave the data alone
//! - some, with `force`: reset, then populate
//!
//! After a run that changed data, a dataset summary is logged.

/// Fixed demo dataset definitions
pub mod demo_set;
/// Team scoring
pub mod leaderboard;
/// Link-row cleanup strategies
pub mod link_cleanup;
/// Reset and populate operations
pub mod manager;
/// Post-run dataset summary
pub mod summary;

pub use link_cleanup::{LinkCleanup, LinkCleanupReport};
pub use manager::{DemoDataManager, PopulateReport, ResetReport};
pub use summary::{DatasetSummary, TeamStanding};

use crate::database_plugins::SeedStore;
use crate::errors::AppResult;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::{info, warn};

/// Phase names attached to lifecycle errors
pub mod phases {
    /// Existence check before deciding what to do
    pub const CHECK: &str = "check existing data";
    /// Transactional deletion of all demo records
    pub const RESET: &str = "reset";
    /// Account creation
    pub const CREATE_ACCOUNTS: &str = "create accounts";
    /// Team creation and membership
    pub const CREATE_TEAMS: &str = "create teams";
    /// Workout creation and suggestions
    pub const CREATE_WORKOUTS: &str = "create workouts";
    /// Activity generation
    pub const CREATE_ACTIVITIES: &str = "create activities";
    /// Leaderboard scoring
    pub const COMPUTE_LEADERBOARDS: &str = "compute leaderboards";
}

/// Options for a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Reset and repopulate even when accounts already exist
    pub force: bool,
}

/// What a seeding run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Accounts existed and `force` was not set; nothing changed
    Skipped,
    /// The store was empty and has been populated
    Populated,
    /// Existing data was reset and the store repopulated
    ResetAndPopulated,
}

impl Display for SeedOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Skipped => f.write_str("Existing data found; skipped (use --force to reset)"),
            Self::Populated => f.write_str("Demo data populated"),
            Self::ResetAndPopulated => f.write_str("Existing data reset and demo data populated"),
        }
    }
}

/// Apply the skip policy and run the lifecycle
///
/// # Errors
///
/// Returns the first lifecycle error, tagged with the phase that failed.
/// Skipping because data exists is not an error.
pub async fn run<S>(store: &S, options: SeedOptions) -> AppResult<SeedOutcome>
where
    S: SeedStore + ?Sized,
{
    let has_accounts = store
        .account_exists()
        .await
        .map_err(|e| e.with_phase(phases::CHECK))?;

    let manager = DemoDataManager::new(store);
    let outcome = match (has_accounts, options.force) {
        (false, _) => {
            manager.populate().await?;
            SeedOutcome::Populated
        }
        (true, false) => {
            info!("Accounts already exist; skipping demo data (pass --force to reset and repopulate)");
            return Ok(SeedOutcome::Skipped);
        }
        (true, true) => {
            info!("Accounts already exist; --force given, resetting before populating");
            manager.reset().await?;
            manager.populate().await?;
            SeedOutcome::ResetAndPopulated
        }
    };

    // The data is already in place; a failed summary only loses the report
    match DatasetSummary::collect(store).await {
        Ok(summary) => summary.log(),
        Err(e) => warn!(error = %e, "Could not collect dataset summary"),
    }
    Ok(outcome)
}
