// ABOUTME: Leaderboard persistence, one derived score row per team
// ABOUTME: Uniqueness of the team reference is enforced by the schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::shared::mappers::parse_leaderboard_from_row;
use crate::errors::database::DatabaseError;
use crate::errors::AppResult;
use crate::models::LeaderboardEntry;
use uuid::Uuid;

use super::Database;

impl Database {
    /// Insert a leaderboard entry
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. the team already has an entry
    pub async fn create_leaderboard_entry_impl(&self, entry: &LeaderboardEntry) -> AppResult<Uuid> {
        sqlx::query("INSERT INTO leaderboard (id, team_id, total_points) VALUES (?, ?, ?)")
            .bind(entry.id.to_string())
            .bind(entry.team_id.to_string())
            .bind(entry.total_points)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("insert row", "leaderboard", e))?;

        Ok(entry.id)
    }

    /// All leaderboard entries in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn list_leaderboard_impl(&self) -> AppResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query("SELECT id, team_id, total_points FROM leaderboard ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("list rows", "leaderboard", e))?;

        rows.iter().map(parse_leaderboard_from_row).collect()
    }
}
