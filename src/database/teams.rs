// ABOUTME: Team persistence and the team_members join table
// ABOUTME: Inserts teams, links members idempotently and looks teams up by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::shared::mappers::{get_uuid, parse_team_from_row};
use crate::errors::database::DatabaseError;
use crate::errors::AppResult;
use crate::models::Team;
use uuid::Uuid;

use super::Database;

impl Database {
    /// Insert a team
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_team_impl(&self, team: &Team) -> AppResult<Uuid> {
        sqlx::query("INSERT INTO teams (id, name, created_at) VALUES (?, ?, ?)")
            .bind(team.id.to_string())
            .bind(&team.name)
            .bind(team.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("insert row", "teams", e))?;

        Ok(team.id)
    }

    /// Link accounts to a team; links that already exist are left alone
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails, e.g. an id does not reference an existing record
    pub async fn add_team_members_impl(&self, team_id: Uuid, account_ids: &[Uuid]) -> AppResult<()> {
        let team_id = team_id.to_string();
        for account_id in account_ids {
            sqlx::query("INSERT OR IGNORE INTO team_members (team_id, account_id) VALUES (?, ?)")
                .bind(&team_id)
                .bind(account_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::query("insert link", "team_members", e))?;
        }
        Ok(())
    }

    /// All teams in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn list_teams_impl(&self) -> AppResult<Vec<Team>> {
        let rows = sqlx::query("SELECT id, name, created_at FROM teams ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("list rows", "teams", e))?;

        rows.iter().map(parse_team_from_row).collect()
    }

    /// First team with the given name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the row is malformed
    pub async fn get_team_by_name_impl(&self, name: &str) -> AppResult<Option<Team>> {
        let row = sqlx::query(
            "SELECT id, name, created_at FROM teams WHERE name = ? ORDER BY rowid LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("find by name", "teams", e))?;

        row.as_ref().map(parse_team_from_row).transpose()
    }

    /// Accounts linked to a team, in link order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn team_member_ids_impl(&self, team_id: Uuid) -> AppResult<Vec<Uuid>> {
        let rows = sqlx::query(
            "SELECT account_id FROM team_members WHERE team_id = ? ORDER BY rowid",
        )
        .bind(team_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("list links", "team_members", e))?;

        rows.iter().map(|row| get_uuid(row, "account_id")).collect()
    }
}
