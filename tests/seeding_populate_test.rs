// ABOUTME: Integration tests for populating the demo dataset
// ABOUTME: Checks record counts, memberships, suggestions, activity values and leaderboard totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{FaultPlan, FaultyStore, DEMO_COUNTS};
use octofit_tracker::database_plugins::{RecordKind, SeedStore};
use octofit_tracker::models::{Account, Activity, Team};
use octofit_tracker::seeding::leaderboard::team_total_points;
use octofit_tracker::seeding::{phases, DemoDataManager, PopulateReport};
use std::collections::HashSet;

#[tokio::test]
async fn test_populate_empty_store_creates_demo_set() {
    let database = common::create_test_database().await.unwrap();

    let report = DemoDataManager::new(&database).populate().await.unwrap();

    assert_eq!(
        report,
        PopulateReport {
            accounts: 4,
            teams: 2,
            workouts: 3,
            activities: 12,
            leaderboard_entries: 2,
        }
    );
    assert_eq!(common::snapshot_counts(&database).await.unwrap(), DEMO_COUNTS);
}

#[tokio::test]
async fn test_accounts_match_demo_people() {
    let database = common::create_test_database().await.unwrap();
    DemoDataManager::new(&database).populate().await.unwrap();

    let accounts = database.list_accounts().await.unwrap();
    let summary: Vec<(&str, &str, String)> = accounts
        .iter()
        .map(|a| (a.username.as_str(), a.email.as_str(), a.full_name()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("alice", "alice@example.com", "Alice Silva".to_owned()),
            ("bob", "bob@example.com", "Bob Souza".to_owned()),
            ("carol", "carol@example.com", "Carol Lima".to_owned()),
            ("dave", "dave@example.com", "Dave Oliveira".to_owned()),
        ]
    );
}

#[tokio::test]
async fn test_team_alpha_contains_first_two_accounts() {
    let database = common::create_test_database().await.unwrap();
    DemoDataManager::new(&database).populate().await.unwrap();

    let accounts = database.list_accounts().await.unwrap();
    let alpha = database
        .get_team_by_name("Team Alpha")
        .await
        .unwrap()
        .expect("Team Alpha should exist");
    let members = database.team_member_ids(alpha.id).await.unwrap();

    assert_eq!(members, vec![accounts[0].id, accounts[1].id]);
}

#[tokio::test]
async fn test_team_memberships_partition_accounts() {
    let database = common::create_test_database().await.unwrap();
    DemoDataManager::new(&database).populate().await.unwrap();

    let teams = database.list_teams().await.unwrap();
    assert_eq!(
        teams.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["Team Alpha", "Team Beta"]
    );

    let mut seen = HashSet::new();
    for team in &teams {
        let members = database.team_member_ids(team.id).await.unwrap();
        assert_eq!(members.len(), 2, "{} should have two members", team.name);
        for member in members {
            assert!(seen.insert(member), "member shared between teams");
        }
    }

    let all: HashSet<_> = database
        .list_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(seen, all);
}

#[tokio::test]
async fn test_workout_suggestions() {
    let database = common::create_test_database().await.unwrap();
    DemoDataManager::new(&database).populate().await.unwrap();

    let ids: Vec<_> = database
        .list_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    let workouts = database.list_workouts().await.unwrap();
    assert_eq!(workouts.len(), 3);

    let expected = [
        ("Quick HIIT", "20-minute high intensity interval training", vec![ids[0], ids[2]]),
        ("Morning Yoga", "30-minute mobility and stretch flow", vec![ids[1], ids[3]]),
        ("Long Run", "60-minute steady state run", ids.clone()),
    ];
    for (workout, (name, description, suggested_for)) in workouts.iter().zip(expected) {
        assert_eq!(workout.name, name);
        assert_eq!(workout.description, description);
        assert_eq!(
            database.workout_suggestion_ids(workout.id).await.unwrap(),
            suggested_for
        );
    }
}

#[tokio::test]
async fn test_activity_values_follow_formula() {
    let database = common::create_test_database().await.unwrap();
    let before = Utc::now();
    DemoDataManager::new(&database).populate().await.unwrap();
    let after = Utc::now();

    let accounts = database.list_accounts().await.unwrap();
    for (i, account) in (0_i64..).zip(&accounts) {
        let activities = database.list_activities_for_account(account.id).await.unwrap();
        assert_eq!(activities.len(), 3);

        for (j, activity) in (0_i64..).zip(&activities) {
            let expected_type = if j % 2 == 0 { "run" } else { "bike" };
            assert_eq!(activity.activity_type, expected_type);
            assert_eq!(i64::from(activity.duration_minutes), 20 + 10 * i + 5 * j);
            assert!((activity.calories_burned - (150 + 30 * i + 20 * j) as f64).abs() < 1e-9);

            let offset = chrono::Duration::days(2 * i + j);
            assert!(activity.date >= before - offset - chrono::Duration::seconds(1));
            assert!(activity.date <= after - offset + chrono::Duration::seconds(1));
        }
    }
}

#[tokio::test]
async fn test_leaderboard_totals_match_closed_form() {
    let database = common::create_test_database().await.unwrap();
    DemoDataManager::new(&database).populate().await.unwrap();

    assert_eq!(
        common::points_by_team(&database).await.unwrap(),
        vec![("Team Alpha".to_owned(), 1110), ("Team Beta".to_owned(), 1470)]
    );
}

#[tokio::test]
async fn test_leaderboard_covers_teams_without_members_or_activities() {
    let database = common::create_test_database().await.unwrap();

    // A team created outside the demo set, with one member who has no activities
    let loner = Account::new("erin", "erin@example.com", "Erin", "Costa");
    let loner_id = database.create_account(&loner).await.unwrap();
    let empty_team = database.create_team(&Team::new("Team Gamma")).await.unwrap();
    database.add_team_members(empty_team, &[loner_id]).await.unwrap();
    database.create_team(&Team::new("Team Delta")).await.unwrap();

    DemoDataManager::new(&database).populate().await.unwrap();

    assert_eq!(
        common::points_by_team(&database).await.unwrap(),
        vec![
            ("Team Alpha".to_owned(), 1110),
            ("Team Beta".to_owned(), 1470),
            ("Team Delta".to_owned(), 0),
            ("Team Gamma".to_owned(), 0),
        ]
    );
}

#[tokio::test]
async fn test_fractional_calories_truncate_per_member() {
    let database = common::create_test_database().await.unwrap();

    let a = database
        .create_account(&Account::new("erin", "erin@example.com", "Erin", "Costa"))
        .await
        .unwrap();
    let b = database
        .create_account(&Account::new("finn", "finn@example.com", "Finn", "Rocha"))
        .await
        .unwrap();
    for (account, calories) in [(a, 100.6), (a, 0.2), (b, 49.9)] {
        let activity = Activity::new(account, "swim", 15, calories, Utc::now());
        database.create_activity(&activity).await.unwrap();
    }
    let team = database.create_team(&Team::new("Team Fraction")).await.unwrap();
    database.add_team_members(team, &[a, b]).await.unwrap();

    let points = team_total_points(&database, team).await.unwrap();
    // trunc(100.8) + trunc(49.9)
    assert_eq!(points, 149);
}

#[tokio::test]
async fn test_populate_failure_reports_phase_and_keeps_earlier_records() {
    let database = common::create_test_database().await.unwrap();
    let store = FaultyStore::new(
        database,
        FaultPlan {
            fail_create: Some(RecordKind::Workout),
            ..FaultPlan::default()
        },
    );

    let error = DemoDataManager::new(&store).populate().await.unwrap_err();

    assert_eq!(error.phase(), Some(phases::CREATE_WORKOUTS));
    assert!(error.to_string().starts_with("[create workouts]"));
    assert_eq!(store.count_records(RecordKind::Account).await.unwrap(), 4);
    assert_eq!(store.count_records(RecordKind::Team).await.unwrap(), 2);
    assert_eq!(store.count_records(RecordKind::Workout).await.unwrap(), 0);
    assert_eq!(store.count_records(RecordKind::Activity).await.unwrap(), 0);
}
