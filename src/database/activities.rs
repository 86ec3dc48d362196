// ABOUTME: Activity persistence and the per-account calorie aggregate
// ABOUTME: The aggregate feeds team leaderboard totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::shared::mappers::parse_activity_from_row;
use crate::errors::database::DatabaseError;
use crate::errors::AppResult;
use crate::models::Activity;
use uuid::Uuid;

use super::Database;

impl Database {
    /// Insert an activity
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. the owning account does not exist
    pub async fn create_activity_impl(&self, activity: &Activity) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO activities (id, account_id, activity_type, duration_minutes, calories_burned, date)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(activity.id.to_string())
        .bind(activity.account_id.to_string())
        .bind(&activity.activity_type)
        .bind(i64::from(activity.duration_minutes))
        .bind(activity.calories_burned)
        .bind(activity.date.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("insert row", "activities", e))?;

        Ok(activity.id)
    }

    /// Activities owned by an account, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn list_activities_for_account_impl(
        &self,
        account_id: Uuid,
    ) -> AppResult<Vec<Activity>> {
        let rows = sqlx::query(
            r"
            SELECT id, account_id, activity_type, duration_minutes, calories_burned, date
            FROM activities
            WHERE account_id = ?
            ORDER BY rowid
            ",
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("list rows", "activities", e))?;

        rows.iter().map(parse_activity_from_row).collect()
    }

    /// Sum of `calories_burned` over an account's activities
    ///
    /// `SUM` over zero rows is `NULL`, surfaced here as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn sum_calories_for_account_impl(&self, account_id: Uuid) -> AppResult<Option<f64>> {
        sqlx::query_scalar("SELECT SUM(calories_burned) FROM activities WHERE account_id = ?")
            .bind(account_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("sum calories", "activities", e).into())
    }
}
