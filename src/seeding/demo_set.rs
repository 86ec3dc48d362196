// ABOUTME: The fixed demo dataset: four accounts, two teams, three workouts and generated activities
// ABOUTME: Relations are expressed as indices into the account list, in creation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Account, Activity, Team, Workout};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use uuid::Uuid;

/// Demo account definition
#[derive(Debug, Clone, Copy)]
pub struct AccountSpec {
    /// Login handle, also the local part of the email address
    pub username: &'static str,
    /// Given name
    pub first_name: &'static str,
    /// Family name
    pub last_name: &'static str,
}

impl AccountSpec {
    /// Contact email on the demo domain
    #[must_use]
    pub fn email(&self) -> String {
        format!("{}@example.com", self.username)
    }

    /// Build the account record
    #[must_use]
    pub fn to_account(&self) -> Account {
        Account::new(self.username, self.email(), self.first_name, self.last_name)
    }
}

/// Demo team definition
#[derive(Debug, Clone, Copy)]
pub struct TeamSpec {
    /// Team name
    pub name: &'static str,
    /// Indices of member accounts
    pub members: &'static [usize],
}

impl TeamSpec {
    /// Build the team record
    #[must_use]
    pub fn to_team(&self) -> Team {
        Team::new(self.name)
    }
}

/// Demo workout definition
#[derive(Debug, Clone, Copy)]
pub struct WorkoutSpec {
    /// Workout name
    pub name: &'static str,
    /// What the workout involves
    pub description: &'static str,
    /// Indices of the accounts the workout is suggested for
    pub suggested_for: &'static [usize],
}

impl WorkoutSpec {
    /// Build the workout record
    #[must_use]
    pub fn to_workout(&self) -> Workout {
        Workout::new(self.name, self.description)
    }
}

/// Demo accounts, in creation order
pub const ACCOUNTS: [AccountSpec; 4] = [
    AccountSpec {
        username: "alice",
        first_name: "Alice",
        last_name: "Silva",
    },
    AccountSpec {
        username: "bob",
        first_name: "Bob",
        last_name: "Souza",
    },
    AccountSpec {
        username: "carol",
        first_name: "Carol",
        last_name: "Lima",
    },
    AccountSpec {
        username: "dave",
        first_name: "Dave",
        last_name: "Oliveira",
    },
];

/// Demo teams with disjoint memberships
pub const TEAMS: [TeamSpec; 2] = [
    TeamSpec {
        name: "Team Alpha",
        members: &[0, 1],
    },
    TeamSpec {
        name: "Team Beta",
        members: &[2, 3],
    },
];

/// Demo workouts and who they are suggested for
pub const WORKOUTS: [WorkoutSpec; 3] = [
    WorkoutSpec {
        name: "Quick HIIT",
        description: "20-minute high intensity interval training",
        suggested_for: &[0, 2],
    },
    WorkoutSpec {
        name: "Morning Yoga",
        description: "30-minute mobility and stretch flow",
        suggested_for: &[1, 3],
    },
    WorkoutSpec {
        name: "Long Run",
        description: "60-minute steady state run",
        suggested_for: &[0, 1, 2, 3],
    },
];

/// Activities generated per account
pub const ACTIVITIES_PER_ACCOUNT: u32 = 3;

/// One generated activity, before it is bound to an account
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivitySpec {
    /// "run" or "bike"
    pub activity_type: &'static str,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned
    pub calories_burned: f64,
    /// Days before the population timestamp
    pub days_ago: i64,
}

impl ActivitySpec {
    /// Activity `activity_index` of the account at `account_index`
    #[must_use]
    pub fn generate(account_index: u32, activity_index: u32) -> Self {
        let (i, j) = (account_index, activity_index);
        Self {
            activity_type: if j % 2 == 0 { "run" } else { "bike" },
            duration_minutes: 20 + 10 * i + 5 * j,
            calories_burned: f64::from(150 + 30 * i + 20 * j),
            days_ago: i64::from(2 * i + j),
        }
    }

    /// Build the activity record for an account, dated relative to `now`
    #[must_use]
    pub fn to_activity(&self, account_id: Uuid, now: DateTime<Utc>) -> Activity {
        Activity::new(
            account_id,
            self.activity_type,
            self.duration_minutes,
            self.calories_burned,
            now - Duration::days(self.days_ago),
        )
    }
}

/// Resolve account indices against the ids created so far
///
/// # Errors
///
/// Returns an invalid input error if an index has no matching account
pub fn resolve_accounts(account_ids: &[Uuid], indices: &[usize]) -> AppResult<Vec<Uuid>> {
    indices
        .iter()
        .map(|&index| {
            account_ids.get(index).copied().ok_or_else(|| {
                AppError::invalid_input(format!("demo account #{index} was not created"))
                    .with_details(json!({ "index": index, "available": account_ids.len() }))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use std::collections::HashSet;

    #[test]
    fn test_activity_formula() {
        let first = ActivitySpec::generate(0, 0);
        assert_eq!(first.activity_type, "run");
        assert_eq!(first.duration_minutes, 20);
        assert!((first.calories_burned - 150.0).abs() < f64::EPSILON);
        assert_eq!(first.days_ago, 0);

        let last = ActivitySpec::generate(3, 2);
        assert_eq!(last.activity_type, "run");
        assert_eq!(last.duration_minutes, 60);
        assert!((last.calories_burned - 280.0).abs() < f64::EPSILON);
        assert_eq!(last.days_ago, 8);

        assert_eq!(ActivitySpec::generate(1, 1).activity_type, "bike");
    }

    #[test]
    fn test_team_calorie_closed_form() {
        let team_total = |members: &[usize]| -> f64 {
            members
                .iter()
                .flat_map(|&i| {
                    (0..ACTIVITIES_PER_ACCOUNT).map(move |j| {
                        ActivitySpec::generate(u32::try_from(i).unwrap(), j).calories_burned
                    })
                })
                .sum()
        };
        assert!((team_total(TEAMS[0].members) - 1110.0).abs() < f64::EPSILON);
        assert!((team_total(TEAMS[1].members) - 1470.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_teams_partition_accounts() {
        let alpha: HashSet<_> = TEAMS[0].members.iter().collect();
        let beta: HashSet<_> = TEAMS[1].members.iter().collect();
        assert!(alpha.is_disjoint(&beta));
        assert_eq!(alpha.len() + beta.len(), ACCOUNTS.len());
    }

    #[test]
    fn test_account_email() {
        assert_eq!(ACCOUNTS[2].email(), "carol@example.com");
        assert_eq!(ACCOUNTS[3].to_account().full_name(), "Dave Oliveira");
    }

    #[test]
    fn test_resolve_accounts_rejects_missing_index() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        assert_eq!(resolve_accounts(&ids, &[1, 0]).unwrap(), vec![ids[1], ids[0]]);

        let error = resolve_accounts(&ids, &[0, 2]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.details["index"], 2);
        assert_eq!(error.context.details["available"], 2);
    }
}
