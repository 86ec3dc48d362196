// ABOUTME: SQLite implementation of the SeedStore and StoreTransaction contracts
// ABOUTME: Delegates record operations to Database and runs reset deletions on a guarded transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` store implementation
//!
//! Wraps the inherent `Database` methods to implement `SeedStore`.

use super::shared::mappers::get_uuid;
use super::shared::transactions::SqliteTransactionGuard;
use super::{LinkRelation, RecordKind, SeedStore, StoreTransaction};
use crate::database::Database;
use crate::errors::database::DatabaseError;
use crate::errors::AppResult;
use crate::models::{Account, Activity, LeaderboardEntry, Team, Workout};
use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

#[async_trait]
impl SeedStore for Database {
    async fn create_account(&self, account: &Account) -> AppResult<Uuid> {
        self.create_account_impl(account).await
    }

    async fn create_team(&self, team: &Team) -> AppResult<Uuid> {
        self.create_team_impl(team).await
    }

    async fn add_team_members(&self, team_id: Uuid, account_ids: &[Uuid]) -> AppResult<()> {
        self.add_team_members_impl(team_id, account_ids).await
    }

    async fn create_workout(&self, workout: &Workout) -> AppResult<Uuid> {
        self.create_workout_impl(workout).await
    }

    async fn add_workout_suggestions(
        &self,
        workout_id: Uuid,
        account_ids: &[Uuid],
    ) -> AppResult<()> {
        self.add_workout_suggestions_impl(workout_id, account_ids)
            .await
    }

    async fn create_activity(&self, activity: &Activity) -> AppResult<Uuid> {
        self.create_activity_impl(activity).await
    }

    async fn create_leaderboard_entry(&self, entry: &LeaderboardEntry) -> AppResult<Uuid> {
        self.create_leaderboard_entry_impl(entry).await
    }

    async fn account_exists(&self) -> AppResult<bool> {
        self.account_exists_impl().await
    }

    async fn list_accounts(&self) -> AppResult<Vec<Account>> {
        self.list_accounts_impl().await
    }

    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.list_teams_impl().await
    }

    async fn get_team_by_name(&self, name: &str) -> AppResult<Option<Team>> {
        self.get_team_by_name_impl(name).await
    }

    async fn team_member_ids(&self, team_id: Uuid) -> AppResult<Vec<Uuid>> {
        self.team_member_ids_impl(team_id).await
    }

    async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.list_workouts_impl().await
    }

    async fn workout_suggestion_ids(&self, workout_id: Uuid) -> AppResult<Vec<Uuid>> {
        self.workout_suggestion_ids_impl(workout_id).await
    }

    async fn list_activities_for_account(&self, account_id: Uuid) -> AppResult<Vec<Activity>> {
        self.list_activities_for_account_impl(account_id).await
    }

    async fn list_leaderboard(&self) -> AppResult<Vec<LeaderboardEntry>> {
        self.list_leaderboard_impl().await
    }

    async fn sum_calories_for_account(&self, account_id: Uuid) -> AppResult<Option<f64>> {
        self.sum_calories_for_account_impl(account_id).await
    }

    async fn count_records(&self, kind: RecordKind) -> AppResult<u64> {
        self.count_rows_impl(kind.table_name()).await
    }

    async fn count_links(&self, relation: LinkRelation) -> AppResult<u64> {
        self.count_rows_impl(relation.join_table()).await
    }

    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        let tx = self
            .pool()
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionFailed {
                action: "begin",
                source,
            })?;
        Ok(Box::new(SqliteStoreTransaction {
            guard: SqliteTransactionGuard::new(tx),
        }))
    }
}

/// Reset transaction over a pooled `SQLite` connection
pub struct SqliteStoreTransaction {
    guard: SqliteTransactionGuard<'static>,
}

#[async_trait]
impl StoreTransaction for SqliteStoreTransaction {
    async fn delete_all(&mut self, kind: RecordKind) -> AppResult<u64> {
        let table = kind.table_name();
        let result = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(self.guard.executor()?)
            .await
            .map_err(|e| DatabaseError::query("delete all rows", table, e))?;
        Ok(result.rows_affected())
    }

    async fn supports_bulk_link_delete(&mut self, relation: LinkRelation) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(relation.join_table())
        .fetch_one(self.guard.executor()?)
        .await
        .map_err(|e| DatabaseError::query("inspect schema", "sqlite_master", e))?;

        debug!(relation = %relation, addressable = count > 0, "Checked join table");
        Ok(count > 0)
    }

    async fn delete_all_links(&mut self, relation: LinkRelation) -> AppResult<u64> {
        let table = relation.join_table();
        let result = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(self.guard.executor()?)
            .await
            .map_err(|e| DatabaseError::query("delete all links", table, e))?;
        Ok(result.rows_affected())
    }

    async fn link_owner_ids(&mut self, relation: LinkRelation) -> AppResult<Vec<Uuid>> {
        let table = relation.owner().table_name();
        let rows = sqlx::query(&format!("SELECT id FROM {table} ORDER BY rowid"))
            .fetch_all(self.guard.executor()?)
            .await
            .map_err(|e| DatabaseError::query("list owner ids", table, e))?;

        rows.iter().map(|row| get_uuid(row, "id")).collect()
    }

    async fn clear_links(&mut self, relation: LinkRelation, owner_id: Uuid) -> AppResult<u64> {
        let table = relation.join_table();
        let result = sqlx::query(&format!(
            "DELETE FROM {table} WHERE {} = ?",
            relation.owner_column()
        ))
        .bind(owner_id.to_string())
        .execute(self.guard.executor()?)
        .await
        .map_err(|e| DatabaseError::query("clear links", table, e))?;
        Ok(result.rows_affected())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let Self { guard } = *self;
        guard.commit().await
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let Self { guard } = *self;
        guard.rollback().await
    }
}
