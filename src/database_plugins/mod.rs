// ABOUTME: Storage contract the demo data lifecycle is written against
// ABOUTME: SeedStore covers creation, queries and aggregates; StoreTransaction covers the reset deletions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage abstraction for the demo data lifecycle
//!
//! The lifecycle never talks to `SQLite` directly. It needs a store that can
//! create records, add many-to-many links, answer an existence check, sum
//! calories per account and open an all-or-nothing transaction for deletions.

use crate::errors::AppResult;
use crate::models::{Account, Activity, LeaderboardEntry, Team, Workout};
use async_trait::async_trait;
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

pub mod shared;
pub mod sqlite;

/// The five record kinds held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// People
    Account,
    /// Named groups of accounts
    Team,
    /// Suggested exercise templates
    Workout,
    /// Historical exercise records
    Activity,
    /// Derived per-team scores
    Leaderboard,
}

impl RecordKind {
    /// All kinds, parents first
    pub const ALL: [Self; 5] = [
        Self::Account,
        Self::Team,
        Self::Workout,
        Self::Activity,
        Self::Leaderboard,
    ];

    /// Backing table name
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Account => "accounts",
            Self::Team => "teams",
            Self::Workout => "workouts",
            Self::Activity => "activities",
            Self::Leaderboard => "leaderboard",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.table_name())
    }
}

/// Many-to-many relations between a parent record and accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    /// Team ↔ Account (team members)
    TeamMembers,
    /// Workout ↔ Account (workouts suggested for an account)
    WorkoutSuggestions,
}

impl LinkRelation {
    /// Both relations
    pub const ALL: [Self; 2] = [Self::TeamMembers, Self::WorkoutSuggestions];

    /// Join table name
    #[must_use]
    pub const fn join_table(self) -> &'static str {
        match self {
            Self::TeamMembers => "team_members",
            Self::WorkoutSuggestions => "workout_suggestions",
        }
    }

    /// Record kind owning the relation
    #[must_use]
    pub const fn owner(self) -> RecordKind {
        match self {
            Self::TeamMembers => RecordKind::Team,
            Self::WorkoutSuggestions => RecordKind::Workout,
        }
    }

    /// Join table column referencing the owner
    #[must_use]
    pub const fn owner_column(self) -> &'static str {
        match self {
            Self::TeamMembers => "team_id",
            Self::WorkoutSuggestions => "workout_id",
        }
    }
}

impl Display for LinkRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.join_table())
    }
}

/// Persistence operations used by `populate()`, the skip policy and the summary
#[async_trait]
pub trait SeedStore: Send + Sync {
    // ================================
    // Creation
    // ================================

    /// Insert an account
    async fn create_account(&self, account: &Account) -> AppResult<Uuid>;

    /// Insert a team
    async fn create_team(&self, team: &Team) -> AppResult<Uuid>;

    /// Link accounts to a team; existing links are left alone
    async fn add_team_members(&self, team_id: Uuid, account_ids: &[Uuid]) -> AppResult<()>;

    /// Insert a workout
    async fn create_workout(&self, workout: &Workout) -> AppResult<Uuid>;

    /// Suggest a workout to accounts; existing links are left alone
    async fn add_workout_suggestions(&self, workout_id: Uuid, account_ids: &[Uuid])
        -> AppResult<()>;

    /// Insert an activity
    async fn create_activity(&self, activity: &Activity) -> AppResult<Uuid>;

    /// Insert a leaderboard entry
    async fn create_leaderboard_entry(&self, entry: &LeaderboardEntry) -> AppResult<Uuid>;

    // ================================
    // Queries
    // ================================

    /// Whether at least one account exists
    async fn account_exists(&self) -> AppResult<bool>;

    /// All accounts in creation order
    async fn list_accounts(&self) -> AppResult<Vec<Account>>;

    /// All teams in creation order
    async fn list_teams(&self) -> AppResult<Vec<Team>>;

    /// First team with the given name
    async fn get_team_by_name(&self, name: &str) -> AppResult<Option<Team>>;

    /// Accounts linked to a team, in link order
    async fn team_member_ids(&self, team_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// All workouts in creation order
    async fn list_workouts(&self) -> AppResult<Vec<Workout>>;

    /// Accounts a workout is suggested for, in link order
    async fn workout_suggestion_ids(&self, workout_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Activities owned by an account, in creation order
    async fn list_activities_for_account(&self, account_id: Uuid) -> AppResult<Vec<Activity>>;

    /// All leaderboard entries in creation order
    async fn list_leaderboard(&self) -> AppResult<Vec<LeaderboardEntry>>;

    // ================================
    // Aggregates
    // ================================

    /// Sum of `calories_burned` over an account's activities; `None` when it has none
    async fn sum_calories_for_account(&self, account_id: Uuid) -> AppResult<Option<f64>>;

    /// Number of records of a kind
    async fn count_records(&self, kind: RecordKind) -> AppResult<u64>;

    /// Number of link rows in a relation
    async fn count_links(&self, relation: LinkRelation) -> AppResult<u64>;

    // ================================
    // Transactions
    // ================================

    /// Open an all-or-nothing transaction for bulk deletions
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>>;
}

/// Deletion operations available inside a transaction
///
/// Dropping a transaction without calling [`StoreTransaction::commit`] rolls it back.
#[async_trait]
pub trait StoreTransaction: Send {
    /// Delete every record of a kind, returning the number of rows removed
    async fn delete_all(&mut self, kind: RecordKind) -> AppResult<u64>;

    /// Whether the join relation can be addressed directly for a bulk delete
    async fn supports_bulk_link_delete(&mut self, relation: LinkRelation) -> AppResult<bool>;

    /// Delete every link row of a relation with one statement
    async fn delete_all_links(&mut self, relation: LinkRelation) -> AppResult<u64>;

    /// Identifiers of every record owning the relation (teams or workouts)
    async fn link_owner_ids(&mut self, relation: LinkRelation) -> AppResult<Vec<Uuid>>;

    /// Remove the links of a single owner record
    async fn clear_links(&mut self, relation: LinkRelation, owner_id: Uuid) -> AppResult<u64>;

    /// Make every deletion in this transaction permanent
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Discard every deletion in this transaction
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}
