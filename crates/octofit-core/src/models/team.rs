// ABOUTME: Team model, a named group of accounts
// ABOUTME: Membership is a many-to-many relation stored outside the team row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named group of accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// When the team was created
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
