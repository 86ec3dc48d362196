// ABOUTME: Database configuration types for SQLite file and in-memory connections
// ABOUTME: Parses DATABASE_URL and pool sizing from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{database, env_vars};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `sqlite://<path>`, `sqlite::memory:` and bare file paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or names a database engine other than `SQLite`
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "database URL is empty",
            ));
        }

        if let Some(rest) = s.strip_prefix("sqlite:") {
            // Strip query parameters such as ?mode=rwc; connect options are set in code
            let path_str = rest.split('?').next().unwrap_or(rest);
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            if path_str == ":memory:" || path_str.is_empty() {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("unsupported database URL '{s}': only sqlite is supported"),
            ))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/octofit.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: database::DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` or `DATABASE_MAX_CONNECTIONS` is malformed
    pub fn from_env() -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(&env_var_or(
            env_vars::DATABASE_URL,
            database::DEFAULT_DATABASE_URL,
        ))?;
        let max_connections = env_var_or(
            env_vars::DATABASE_MAX_CONNECTIONS,
            &database::DEFAULT_MAX_CONNECTIONS.to_string(),
        )
        .parse()
        .map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {} value: {e}", env_vars::DATABASE_MAX_CONNECTIONS),
            )
        })?;

        Ok(Self {
            url,
            max_connections,
        })
    }

    /// Replace the configured URL with a command-line override
    ///
    /// # Errors
    ///
    /// Returns an error if the override cannot be parsed
    pub fn with_url_override(mut self, url: Option<&str>) -> AppResult<Self> {
        if let Some(url) = url {
            self.url = DatabaseUrl::parse_url(url)?;
        }
        Ok(self)
    }

    /// Pool size actually used for this database
    #[must_use]
    pub fn effective_max_connections(&self) -> u32 {
        if self.url.is_memory() {
            database::MEMORY_MAX_CONNECTIONS
        } else {
            self.max_connections.max(1)
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
