// ABOUTME: SQL row to model conversion helpers for the SQLite store.
// ABOUTME: Decodes TEXT identifiers and RFC 3339 timestamps into typed model fields.

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Model ↔ SQL row conversion helpers
//!
//! Identifiers are stored as hyphenated UUID text and timestamps as RFC 3339
//! text, so every mapper decodes them explicitly and reports the offending
//! column when a value is malformed.

use crate::errors::database::DatabaseError;
use crate::errors::{AppError, AppResult};
use crate::models::{Account, Activity, LeaderboardEntry, Team, Workout};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

/// Read a column, mapping driver errors to `AppError`
fn column<'r, T>(row: &'r SqliteRow, name: &'static str) -> AppResult<T>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| AppError::database(format!("Failed to get column '{name}': {e}")))
}

/// Decode a UUID stored as text
///
/// # Errors
///
/// Returns an error if the column is missing or does not hold a valid UUID
pub fn get_uuid(row: &SqliteRow, name: &'static str) -> AppResult<Uuid> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DatabaseError::invalid_data(name, format!("'{raw}' is not a UUID: {e}")).into())
}

/// Decode an RFC 3339 timestamp stored as text
///
/// # Errors
///
/// Returns an error if the column is missing or does not hold a valid timestamp
pub fn get_timestamp(row: &SqliteRow, name: &'static str) -> AppResult<DateTime<Utc>> {
    let raw: String = column(row, name)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            DatabaseError::invalid_data(name, format!("'{raw}' is not an RFC 3339 timestamp: {e}"))
                .into()
        })
}

/// Parse an `Account` from an `accounts` row
///
/// # Errors
///
/// Returns an error if any column is missing or malformed
pub fn parse_account_from_row(row: &SqliteRow) -> AppResult<Account> {
    Ok(Account {
        id: get_uuid(row, "id")?,
        username: column(row, "username")?,
        email: column(row, "email")?,
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        created_at: get_timestamp(row, "created_at")?,
    })
}

/// Parse a `Team` from a `teams` row
///
/// # Errors
///
/// Returns an error if any column is missing or malformed
pub fn parse_team_from_row(row: &SqliteRow) -> AppResult<Team> {
    Ok(Team {
        id: get_uuid(row, "id")?,
        name: column(row, "name")?,
        created_at: get_timestamp(row, "created_at")?,
    })
}

/// Parse a `Workout` from a `workouts` row
///
/// # Errors
///
/// Returns an error if any column is missing or malformed
pub fn parse_workout_from_row(row: &SqliteRow) -> AppResult<Workout> {
    Ok(Workout {
        id: get_uuid(row, "id")?,
        name: column(row, "name")?,
        description: column(row, "description")?,
    })
}

/// Parse an `Activity` from an `activities` row
///
/// # Errors
///
/// Returns an error if any column is missing or malformed, or the duration is negative
pub fn parse_activity_from_row(row: &SqliteRow) -> AppResult<Activity> {
    let duration: i64 = column(row, "duration_minutes")?;
    let duration_minutes = u32::try_from(duration).map_err(|_| {
        DatabaseError::invalid_data("duration_minutes", format!("{duration} is out of range"))
    })?;

    Ok(Activity {
        id: get_uuid(row, "id")?,
        account_id: get_uuid(row, "account_id")?,
        activity_type: column(row, "activity_type")?,
        duration_minutes,
        calories_burned: column(row, "calories_burned")?,
        date: get_timestamp(row, "date")?,
    })
}

/// Parse a `LeaderboardEntry` from a `leaderboard` row
///
/// # Errors
///
/// Returns an error if any column is missing or malformed
pub fn parse_leaderboard_from_row(row: &SqliteRow) -> AppResult<LeaderboardEntry> {
    Ok(LeaderboardEntry {
        id: get_uuid(row, "id")?,
        team_id: get_uuid(row, "team_id")?,
        total_points: column(row, "total_points")?,
    })
}
