// ABOUTME: Configuration management module for the demo data loader
// ABOUTME: Loads database settings from the environment with CLI overrides applied by the binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Octofit Tracker
//!
//! - **Database**: connection string and pool sizing

/// Database connection configuration
pub mod database;

pub use database::{DatabaseConfig, DatabaseUrl};
