// ABOUTME: Dataset summary logged after a seeding run
// ABOUTME: Record counts per kind, link counts and leaderboard standings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::{LinkRelation, RecordKind, SeedStore};
use crate::errors::AppResult;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// A team's place on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    /// Team name
    pub team_name: String,
    /// Stored total points
    pub total_points: i64,
    /// Number of current members
    pub member_count: usize,
}

/// Snapshot of what the store holds
#[derive(Debug, Clone, Default)]
pub struct DatasetSummary {
    /// Records per kind, in `RecordKind::ALL` order
    pub records: Vec<(RecordKind, u64)>,
    /// Link rows per relation
    pub links: Vec<(LinkRelation, u64)>,
    /// Leaderboard, highest score first
    pub standings: Vec<TeamStanding>,
}

impl DatasetSummary {
    /// Query the store for counts and standings
    ///
    /// # Errors
    ///
    /// Returns an error if any count or listing query fails
    pub async fn collect<S>(store: &S) -> AppResult<Self>
    where
        S: SeedStore + ?Sized,
    {
        let mut records = Vec::with_capacity(RecordKind::ALL.len());
        for kind in RecordKind::ALL {
            records.push((kind, store.count_records(kind).await?));
        }

        let mut links = Vec::with_capacity(LinkRelation::ALL.len());
        for relation in LinkRelation::ALL {
            links.push((relation, store.count_links(relation).await?));
        }

        let team_names: HashMap<Uuid, String> = store
            .list_teams()
            .await?
            .into_iter()
            .map(|team| (team.id, team.name))
            .collect();

        let mut standings = Vec::new();
        for entry in store.list_leaderboard().await? {
            standings.push(TeamStanding {
                team_name: team_names
                    .get(&entry.team_id)
                    .cloned()
                    .unwrap_or_else(|| entry.team_id.to_string()),
                total_points: entry.total_points,
                member_count: store.team_member_ids(entry.team_id).await?.len(),
            });
        }
        standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));

        Ok(Self {
            records,
            links,
            standings,
        })
    }

    /// Count for a record kind
    #[must_use]
    pub fn count(&self, kind: RecordKind) -> u64 {
        self.records
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }

    /// Count for a link relation
    #[must_use]
    pub fn link_count(&self, relation: LinkRelation) -> u64 {
        self.links
            .iter()
            .find(|(r, _)| *r == relation)
            .map_or(0, |(_, count)| *count)
    }

    /// Log the summary at info level
    pub fn log(&self) {
        info!("=== Demo Data Summary ===");
        for (kind, count) in &self.records {
            info!("  {kind}: {count}");
        }
        for (relation, count) in &self.links {
            info!("  {relation}: {count}");
        }
        for (rank, standing) in self.standings.iter().enumerate() {
            info!(
                "  #{} {} - {} points ({} members)",
                rank + 1,
                standing.team_name,
                standing.total_points,
                standing.member_count
            );
        }
    }
}
