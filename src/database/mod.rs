// ABOUTME: SQLite database manager for the fitness tracker records
// ABOUTME: Opens the connection pool and bootstraps the schema with foreign-keyed tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! `Database` owns the `SQLite` pool. The per-entity operations live in the
//! submodules as inherent `*_impl` methods; `database_plugins::sqlite` exposes
//! them through the `SeedStore` trait.
//!
//! Link tables reference both endpoints with foreign keys and no cascading
//! deletes, so removing a team or workout that still has link rows fails.

mod accounts;
mod activities;
mod leaderboard;
mod teams;
mod workouts;

/// Structured database errors
pub mod errors;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::database::DatabaseError;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info};

/// Database manager for the fitness tracker records
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open a database from a connection string and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the connection fails or the schema cannot be created
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let config = DatabaseConfig {
            url: DatabaseUrl::parse_url(database_url)?,
            ..DatabaseConfig::default()
        };
        Self::from_config(&config).await
    }

    /// Open a database from configuration and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the connection fails
    /// or the schema cannot be created
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::config(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let connection_string = config.url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|source| DatabaseError::ConnectionFailed { source })?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options =
            SqlitePoolOptions::new().max_connections(config.effective_max_connections());
        if config.url.is_memory() {
            // The in-memory database lives exactly as long as its connection
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|source| DatabaseError::ConnectionFailed { source })?;

        debug!(url = %config.url, "Connected to database");

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_accounts().await?;
        self.migrate_teams().await?;
        self.migrate_workouts().await?;
        self.migrate_activities().await?;
        self.migrate_leaderboard().await?;

        info!("Database schema ready");
        Ok(())
    }

    /// Number of rows in a table
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_rows_impl(&self, table: &'static str) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("count rows", table, e))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn execute_ddl(&self, table: &'static str, statement: &str) -> AppResult<()> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|source| DatabaseError::MigrationFailed { table, source })?;
        Ok(())
    }

    async fn migrate_accounts(&self) -> AppResult<()> {
        // username is not unique; populating twice without a reset duplicates accounts
        self.execute_ddl(
            "accounts",
            r"
            CREATE TABLE IF NOT EXISTS accounts (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .await
    }

    async fn migrate_teams(&self) -> AppResult<()> {
        self.execute_ddl(
            "teams",
            r"
            CREATE TABLE IF NOT EXISTS teams (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .await?;

        self.execute_ddl(
            "team_members",
            r"
            CREATE TABLE IF NOT EXISTS team_members (
                team_id TEXT NOT NULL REFERENCES teams(id),
                account_id TEXT NOT NULL REFERENCES accounts(id),
                PRIMARY KEY (team_id, account_id)
            )
            ",
        )
        .await?;

        self.execute_ddl(
            "teams",
            "CREATE INDEX IF NOT EXISTS idx_teams_name ON teams(name)",
        )
        .await?;
        self.execute_ddl(
            "team_members",
            "CREATE INDEX IF NOT EXISTS idx_team_members_account ON team_members(account_id)",
        )
        .await
    }

    async fn migrate_workouts(&self) -> AppResult<()> {
        self.execute_ddl(
            "workouts",
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )
            ",
        )
        .await?;

        self.execute_ddl(
            "workout_suggestions",
            r"
            CREATE TABLE IF NOT EXISTS workout_suggestions (
                workout_id TEXT NOT NULL REFERENCES workouts(id),
                account_id TEXT NOT NULL REFERENCES accounts(id),
                PRIMARY KEY (workout_id, account_id)
            )
            ",
        )
        .await?;

        self.execute_ddl(
            "workout_suggestions",
            "CREATE INDEX IF NOT EXISTS idx_workout_suggestions_account ON workout_suggestions(account_id)",
        )
        .await
    }

    async fn migrate_activities(&self) -> AppResult<()> {
        self.execute_ddl(
            "activities",
            r"
            CREATE TABLE IF NOT EXISTS activities (
                id TEXT PRIMARY KEY,
                account_id TEXT NOT NULL REFERENCES accounts(id),
                activity_type TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL CHECK (duration_minutes >= 0),
                calories_burned REAL NOT NULL,
                date TEXT NOT NULL
            )
            ",
        )
        .await?;

        self.execute_ddl(
            "activities",
            "CREATE INDEX IF NOT EXISTS idx_activities_account ON activities(account_id)",
        )
        .await
    }

    async fn migrate_leaderboard(&self) -> AppResult<()> {
        self.execute_ddl(
            "leaderboard",
            r"
            CREATE TABLE IF NOT EXISTS leaderboard (
                id TEXT PRIMARY KEY,
                team_id TEXT NOT NULL UNIQUE REFERENCES teams(id),
                total_points INTEGER NOT NULL
            )
            ",
        )
        .await
    }
}
