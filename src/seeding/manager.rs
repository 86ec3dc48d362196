// ABOUTME: Demo data lifecycle manager with reset and populate operations
// ABOUTME: Reset deletes children before parents in one transaction; populate creates the demo set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::demo_set::{resolve_accounts, ActivitySpec, ACCOUNTS, ACTIVITIES_PER_ACCOUNT, TEAMS, WORKOUTS};
use super::leaderboard::team_total_points;
use super::link_cleanup::{LinkCleanup, LinkCleanupReport};
use super::phases;
use crate::database_plugins::{LinkRelation, RecordKind, SeedStore, StoreTransaction};
use crate::errors::AppResult;
use crate::models::LeaderboardEntry;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Rows removed by each reset step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetReport {
    /// Activities deleted
    pub activities: u64,
    /// Workout suggestion cleanup
    pub workout_suggestions: LinkCleanupReport,
    /// Workouts deleted
    pub workouts: u64,
    /// Leaderboard entries deleted
    pub leaderboard: u64,
    /// Team membership cleanup
    pub team_members: LinkCleanupReport,
    /// Teams deleted
    pub teams: u64,
    /// Accounts deleted
    pub accounts: u64,
}

impl ResetReport {
    /// Per-record link clears that failed and were skipped
    #[must_use]
    pub const fn tolerated_failures(&self) -> usize {
        self.workout_suggestions.failed_owners + self.team_members.failed_owners
    }

    /// Rows removed across every step
    #[must_use]
    pub const fn total_rows(&self) -> u64 {
        self.activities
            + self.workout_suggestions.rows_removed
            + self.workouts
            + self.leaderboard
            + self.team_members.rows_removed
            + self.teams
            + self.accounts
    }
}

/// Records created by `populate()`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateReport {
    /// Accounts created
    pub accounts: usize,
    /// Teams created
    pub teams: usize,
    /// Workouts created
    pub workouts: usize,
    /// Activities created
    pub activities: usize,
    /// Leaderboard entries created
    pub leaderboard_entries: usize,
}

/// Runs the demo data lifecycle against a store
pub struct DemoDataManager<'a, S: SeedStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SeedStore + ?Sized> DemoDataManager<'a, S> {
    /// Create a manager over a store
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Delete every demo record, children before parents, all or nothing
    ///
    /// # Errors
    ///
    /// Returns the first deletion error after rolling the transaction back.
    /// The error carries the `reset` phase.
    pub async fn reset(&self) -> AppResult<ResetReport> {
        info!("Resetting demo data");
        let mut tx = self
            .store
            .begin()
            .await
            .map_err(|e| e.with_phase(phases::RESET))?;

        match delete_in_order(&mut *tx).await {
            Ok(report) => {
                tx.commit().await.map_err(|e| e.with_phase(phases::RESET))?;
                info!(
                    rows = report.total_rows(),
                    tolerated_failures = report.tolerated_failures(),
                    "Reset complete"
                );
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, "Reset failed, rolling back");
                if let Err(rollback_error) = tx.rollback().await {
                    error!(error = %rollback_error, "Rollback failed");
                }
                Err(e.with_phase(phases::RESET))
            }
        }
    }

    /// Create the demo dataset
    ///
    /// Not transactional: a failure leaves the records created so far in place.
    ///
    /// # Errors
    ///
    /// Returns the first creation error, tagged with the phase that failed
    pub async fn populate(&self) -> AppResult<PopulateReport> {
        let now = Utc::now();

        info!("Step 1: Creating demo accounts...");
        let account_ids = self
            .create_accounts()
            .await
            .map_err(|e| e.with_phase(phases::CREATE_ACCOUNTS))?;

        info!("Step 2: Creating teams...");
        let teams = self
            .create_teams(&account_ids)
            .await
            .map_err(|e| e.with_phase(phases::CREATE_TEAMS))?;

        info!("Step 3: Creating workouts...");
        let workouts = self
            .create_workouts(&account_ids)
            .await
            .map_err(|e| e.with_phase(phases::CREATE_WORKOUTS))?;

        info!("Step 4: Creating activities...");
        let activities = self
            .create_activities(&account_ids, now)
            .await
            .map_err(|e| e.with_phase(phases::CREATE_ACTIVITIES))?;

        info!("Step 5: Computing team leaderboards...");
        let leaderboard_entries = self
            .compute_leaderboards()
            .await
            .map_err(|e| e.with_phase(phases::COMPUTE_LEADERBOARDS))?;

        let report = PopulateReport {
            accounts: account_ids.len(),
            teams,
            workouts,
            activities,
            leaderboard_entries,
        };
        info!(?report, "Demo data populated");
        Ok(report)
    }

    async fn create_accounts(&self) -> AppResult<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(ACCOUNTS.len());
        for spec in &ACCOUNTS {
            let id = self.store.create_account(&spec.to_account()).await?;
            debug!(username = spec.username, %id, "Created account");
            ids.push(id);
        }
        Ok(ids)
    }

    async fn create_teams(&self, account_ids: &[Uuid]) -> AppResult<usize> {
        for spec in &TEAMS {
            let members = resolve_accounts(account_ids, spec.members)?;
            let team_id = self.store.create_team(&spec.to_team()).await?;
            self.store.add_team_members(team_id, &members).await?;
            debug!(team = spec.name, members = members.len(), "Created team");
        }
        Ok(TEAMS.len())
    }

    async fn create_workouts(&self, account_ids: &[Uuid]) -> AppResult<usize> {
        for spec in &WORKOUTS {
            let suggested_for = resolve_accounts(account_ids, spec.suggested_for)?;
            let workout_id = self.store.create_workout(&spec.to_workout()).await?;
            self.store
                .add_workout_suggestions(workout_id, &suggested_for)
                .await?;
            debug!(workout = spec.name, suggested_for = suggested_for.len(), "Created workout");
        }
        Ok(WORKOUTS.len())
    }

    async fn create_activities(&self, account_ids: &[Uuid], now: DateTime<Utc>) -> AppResult<usize> {
        let mut created = 0;
        for (account_index, account_id) in (0_u32..).zip(account_ids) {
            for activity_index in 0..ACTIVITIES_PER_ACCOUNT {
                let activity = ActivitySpec::generate(account_index, activity_index)
                    .to_activity(*account_id, now);
                self.store.create_activity(&activity).await?;
                created += 1;
            }
        }
        Ok(created)
    }

    /// One entry for every team in the store that does not have one yet
    async fn compute_leaderboards(&self) -> AppResult<usize> {
        let scored: HashSet<Uuid> = self
            .store
            .list_leaderboard()
            .await?
            .into_iter()
            .map(|entry| entry.team_id)
            .collect();

        let mut created = 0;
        for team in self.store.list_teams().await? {
            if scored.contains(&team.id) {
                debug!(team = %team.name, "Team already has a leaderboard entry");
                continue;
            }
            let total_points = team_total_points(self.store, team.id).await?;
            self.store
                .create_leaderboard_entry(&LeaderboardEntry::new(team.id, total_points))
                .await?;
            info!(team = %team.name, total_points, "Leaderboard entry created");
            created += 1;
        }
        Ok(created)
    }
}

/// Deletion sequence run inside the reset transaction
async fn delete_in_order(tx: &mut dyn StoreTransaction) -> AppResult<ResetReport> {
    let activities = delete_kind(tx, RecordKind::Activity).await?;
    let workout_suggestions = clean_links(tx, LinkRelation::WorkoutSuggestions).await?;
    let workouts = delete_kind(tx, RecordKind::Workout).await?;
    let leaderboard = delete_kind(tx, RecordKind::Leaderboard).await?;
    let team_members = clean_links(tx, LinkRelation::TeamMembers).await?;
    let teams = delete_kind(tx, RecordKind::Team).await?;
    let accounts = delete_kind(tx, RecordKind::Account).await?;

    Ok(ResetReport {
        activities,
        workout_suggestions,
        workouts,
        leaderboard,
        team_members,
        teams,
        accounts,
    })
}

async fn delete_kind(tx: &mut dyn StoreTransaction, kind: RecordKind) -> AppResult<u64> {
    let rows = tx.delete_all(kind).await?;
    info!(kind = %kind, rows, "Deleted records");
    Ok(rows)
}

async fn clean_links(
    tx: &mut dyn StoreTransaction,
    relation: LinkRelation,
) -> AppResult<LinkCleanupReport> {
    let report = LinkCleanup::detect(tx, relation)
        .await?
        .apply(tx, relation)
        .await?;
    info!(
        relation = %relation,
        strategy = %report.strategy,
        rows = report.rows_removed,
        failed_owners = report.failed_owners,
        "Cleared links"
    );
    Ok(report)
}
