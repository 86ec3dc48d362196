// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database setup, count snapshots and a fault-injecting store wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `octofit_tracker`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use async_trait::async_trait;
use octofit_tracker::{
    database::Database,
    database_plugins::{LinkRelation, RecordKind, SeedStore, StoreTransaction},
    errors::{AppError, AppResult},
    models::{Account, Activity, LeaderboardEntry, Team, Workout},
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Record counts per kind, in `RecordKind::ALL` order, followed by link counts
pub async fn snapshot_counts<S: SeedStore + ?Sized>(store: &S) -> Result<Vec<u64>> {
    let mut counts = Vec::new();
    for kind in RecordKind::ALL {
        counts.push(store.count_records(kind).await?);
    }
    for relation in LinkRelation::ALL {
        counts.push(store.count_links(relation).await?);
    }
    Ok(counts)
}

/// Counts after one `populate()` on an empty store:
/// accounts, teams, workouts, activities, leaderboard, team members, workout suggestions
pub const DEMO_COUNTS: [u64; 7] = [4, 2, 3, 12, 2, 4, 8];

/// Stored leaderboard points keyed by team name
pub async fn points_by_team<S: SeedStore + ?Sized>(store: &S) -> Result<Vec<(String, i64)>> {
    let teams = store.list_teams().await?;
    let mut points = Vec::new();
    for entry in store.list_leaderboard().await? {
        let name = teams
            .iter()
            .find(|team| team.id == entry.team_id)
            .map(|team| team.name.clone())
            .unwrap_or_default();
        points.push((name, entry.total_points));
    }
    points.sort();
    Ok(points)
}

/// Which operations a `FaultyStore` should break
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    /// Fail `delete_all` for this kind inside a transaction
    pub fail_delete: Option<RecordKind>,
    /// Report every join relation as not bulk-deletable
    pub disable_bulk_links: bool,
    /// Fail every per-record `clear_links` call for this relation
    pub fail_clear_links: Option<LinkRelation>,
    /// Fail record creation for this kind
    pub fail_create: Option<RecordKind>,
    /// Fail every link count
    pub fail_count_links: bool,
}

/// Wraps the `SQLite` store and injects failures according to a `FaultPlan`
pub struct FaultyStore {
    inner: Database,
    plan: FaultPlan,
}

impl FaultyStore {
    pub const fn new(inner: Database, plan: FaultPlan) -> Self {
        Self { inner, plan }
    }

    pub const fn inner(&self) -> &Database {
        &self.inner
    }

    fn check_create(&self, kind: RecordKind) -> AppResult<()> {
        if self.plan.fail_create == Some(kind) {
            return Err(AppError::database(format!("injected failure creating {kind}")));
        }
        Ok(())
    }
}

#[async_trait]
impl SeedStore for FaultyStore {
    async fn create_account(&self, account: &Account) -> AppResult<Uuid> {
        self.check_create(RecordKind::Account)?;
        self.inner.create_account(account).await
    }

    async fn create_team(&self, team: &Team) -> AppResult<Uuid> {
        self.check_create(RecordKind::Team)?;
        self.inner.create_team(team).await
    }

    async fn add_team_members(&self, team_id: Uuid, account_ids: &[Uuid]) -> AppResult<()> {
        self.inner.add_team_members(team_id, account_ids).await
    }

    async fn create_workout(&self, workout: &Workout) -> AppResult<Uuid> {
        self.check_create(RecordKind::Workout)?;
        self.inner.create_workout(workout).await
    }

    async fn add_workout_suggestions(
        &self,
        workout_id: Uuid,
        account_ids: &[Uuid],
    ) -> AppResult<()> {
        self.inner
            .add_workout_suggestions(workout_id, account_ids)
            .await
    }

    async fn create_activity(&self, activity: &Activity) -> AppResult<Uuid> {
        self.check_create(RecordKind::Activity)?;
        self.inner.create_activity(activity).await
    }

    async fn create_leaderboard_entry(&self, entry: &LeaderboardEntry) -> AppResult<Uuid> {
        self.check_create(RecordKind::Leaderboard)?;
        self.inner.create_leaderboard_entry(entry).await
    }

    async fn account_exists(&self) -> AppResult<bool> {
        self.inner.account_exists().await
    }

    async fn list_accounts(&self) -> AppResult<Vec<Account>> {
        self.inner.list_accounts().await
    }

    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.inner.list_teams().await
    }

    async fn get_team_by_name(&self, name: &str) -> AppResult<Option<Team>> {
        self.inner.get_team_by_name(name).await
    }

    async fn team_member_ids(&self, team_id: Uuid) -> AppResult<Vec<Uuid>> {
        self.inner.team_member_ids(team_id).await
    }

    async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.inner.list_workouts().await
    }

    async fn workout_suggestion_ids(&self, workout_id: Uuid) -> AppResult<Vec<Uuid>> {
        self.inner.workout_suggestion_ids(workout_id).await
    }

    async fn list_activities_for_account(&self, account_id: Uuid) -> AppResult<Vec<Activity>> {
        self.inner.list_activities_for_account(account_id).await
    }

    async fn list_leaderboard(&self) -> AppResult<Vec<LeaderboardEntry>> {
        self.inner.list_leaderboard().await
    }

    async fn sum_calories_for_account(&self, account_id: Uuid) -> AppResult<Option<f64>> {
        self.inner.sum_calories_for_account(account_id).await
    }

    async fn count_records(&self, kind: RecordKind) -> AppResult<u64> {
        self.inner.count_records(kind).await
    }

    async fn count_links(&self, relation: LinkRelation) -> AppResult<u64> {
        if self.plan.fail_count_links {
            return Err(AppError::database(format!("injected failure counting {relation}")));
        }
        self.inner.count_links(relation).await
    }

    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        Ok(Box::new(FaultyTransaction {
            inner: self.inner.begin().await?,
            plan: self.plan.clone(),
        }))
    }
}

/// Transaction wrapper applying the same `FaultPlan`
struct FaultyTransaction {
    inner: Box<dyn StoreTransaction>,
    plan: FaultPlan,
}

#[async_trait]
impl StoreTransaction for FaultyTransaction {
    async fn delete_all(&mut self, kind: RecordKind) -> AppResult<u64> {
        if self.plan.fail_delete == Some(kind) {
            return Err(AppError::database(format!("injected failure deleting {kind}")));
        }
        self.inner.delete_all(kind).await
    }

    async fn supports_bulk_link_delete(&mut self, relation: LinkRelation) -> AppResult<bool> {
        if self.plan.disable_bulk_links {
            return Ok(false);
        }
        self.inner.supports_bulk_link_delete(relation).await
    }

    async fn delete_all_links(&mut self, relation: LinkRelation) -> AppResult<u64> {
        self.inner.delete_all_links(relation).await
    }

    async fn link_owner_ids(&mut self, relation: LinkRelation) -> AppResult<Vec<Uuid>> {
        self.inner.link_owner_ids(relation).await
    }

    async fn clear_links(&mut self, relation: LinkRelation, owner_id: Uuid) -> AppResult<u64> {
        if self.plan.fail_clear_links == Some(relation) {
            return Err(AppError::database(format!(
                "injected failure clearing {relation} for {owner_id}"
            )));
        }
        self.inner.clear_links(relation, owner_id).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let Self { inner, .. } = *self;
        inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let Self { inner, .. } = *self;
        inner.rollback().await
    }
}
