// ABOUTME: Workout persistence and the workout_suggestions join table
// ABOUTME: Inserts workouts and records which accounts each workout is suggested for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::shared::mappers::{get_uuid, parse_workout_from_row};
use crate::errors::database::DatabaseError;
use crate::errors::AppResult;
use crate::models::Workout;
use uuid::Uuid;

use super::Database;

impl Database {
    /// Insert a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_workout_impl(&self, workout: &Workout) -> AppResult<Uuid> {
        sqlx::query("INSERT INTO workouts (id, name, description) VALUES (?, ?, ?)")
            .bind(workout.id.to_string())
            .bind(&workout.name)
            .bind(&workout.description)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("insert row", "workouts", e))?;

        Ok(workout.id)
    }

    /// Suggest a workout to accounts; links that already exist are left alone
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails
    pub async fn add_workout_suggestions_impl(
        &self,
        workout_id: Uuid,
        account_ids: &[Uuid],
    ) -> AppResult<()> {
        let workout_id = workout_id.to_string();
        for account_id in account_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO workout_suggestions (workout_id, account_id) VALUES (?, ?)",
            )
            .bind(&workout_id)
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("insert link", "workout_suggestions", e))?;
        }
        Ok(())
    }

    /// All workouts in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn list_workouts_impl(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query("SELECT id, name, description FROM workouts ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("list rows", "workouts", e))?;

        rows.iter().map(parse_workout_from_row).collect()
    }

    /// Accounts a workout is suggested for, in link order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn workout_suggestion_ids_impl(&self, workout_id: Uuid) -> AppResult<Vec<Uuid>> {
        let rows = sqlx::query(
            "SELECT account_id FROM workout_suggestions WHERE workout_id = ? ORDER BY rowid",
        )
        .bind(workout_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("list links", "workout_suggestions", e))?;

        rows.iter().map(|row| get_uuid(row, "account_id")).collect()
    }
}
