// ABOUTME: Application constants and environment variable names for the demo data loader
// ABOUTME: Database defaults, logging variables and the service name used in structured logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that override them.

/// Service identification for structured logging
pub mod service_names {
    /// Name reported in startup logs
    pub const OCTOFIT_TRACKER: &str = "octofit-tracker";
}

/// Database defaults
pub mod database {
    /// Default database location when `DATABASE_URL` is not set
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/octofit.db";

    /// Default pool size for file databases
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// In-memory databases must share one connection to see the same data
    pub const MEMORY_MAX_CONNECTIONS: u32 = 1;
}

/// Environment variable names
pub mod env_vars {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Connection pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";

    /// Log output format (json, compact, pretty)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Include file and line in log output when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}
