// ABOUTME: Activity model, a historical exercise record owned by one account
// ABOUTME: Calories are stored as a real number and summed into team leaderboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A historical exercise record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: Uuid,
    /// Owning account
    pub account_id: Uuid,
    /// Free-form label ("run", "bike", ...)
    pub activity_type: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned
    pub calories_burned: f64,
    /// When the activity happened
    pub date: DateTime<Utc>,
}

impl Activity {
    /// Create a new activity with a fresh identifier
    #[must_use]
    pub fn new(
        account_id: Uuid,
        activity_type: impl Into<String>,
        duration_minutes: u32,
        calories_burned: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            activity_type: activity_type.into(),
            duration_minutes,
            calories_burned,
            date,
        }
    }
}
