// ABOUTME: Workout model, a suggested exercise template
// ABOUTME: Suggestions to accounts are a many-to-many relation stored outside the workout row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A suggested exercise template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Short name ("Quick HIIT")
    pub name: String,
    /// What the workout involves
    pub description: String,
}

impl Workout {
    /// Create a new workout with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
        }
    }
}
