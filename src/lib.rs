// ABOUTME: Main library entry point for the Octofit Tracker demo data loader
// ABOUTME: Resets and repopulates the fitness tracker database with a fixed demo dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Octofit Tracker
//!
//! Seeds the Octofit Tracker database with demo accounts, teams, workouts,
//! activities and team leaderboards, optionally wiping existing data first.
//!
//! ## Architecture
//!
//! - **seeding**: the demo data lifecycle (`reset`, `populate`, skip policy)
//! - **`database_plugins`**: the storage contract the lifecycle is written against
//! - **database**: the `SQLite` implementation of that contract
//! - **config** / **logging**: environment-driven configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use octofit_tracker::database::Database;
//! use octofit_tracker::errors::AppResult;
//! use octofit_tracker::seeding::{self, SeedOptions};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let database = Database::new("sqlite:./data/octofit.db").await?;
//!     let outcome = seeding::run(&database, SeedOptions { force: false }).await?;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Application constants and defaults
pub mod constants;

/// `SQLite` storage for the fitness tracker records
pub mod database;

/// Storage contract used by the demo data lifecycle
pub mod database_plugins;

/// Unified error handling re-exported from `octofit-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Core data models re-exported from `octofit-core`
pub mod models {
    pub use octofit_core::models::*;
}

/// Demo data lifecycle: reset, populate and the skip policy
pub mod seeding;
