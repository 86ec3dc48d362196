// ABOUTME: Leaderboard entry model holding a team's derived total score
// ABOUTME: One entry per team; points come from the members' activity calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived per-team total score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Team the score belongs to
    pub team_id: Uuid,
    /// Total points
    pub total_points: i64,
}

impl LeaderboardEntry {
    /// Create a new entry with a fresh identifier
    #[must_use]
    pub fn new(team_id: Uuid, total_points: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            total_points,
        }
    }
}
