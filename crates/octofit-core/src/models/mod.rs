// ABOUTME: Core data models for the Octofit Tracker fitness app
// ABOUTME: Re-exports Account, Team, Workout, Activity and LeaderboardEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records are created once and never updated. Identifiers are generated on
//! construction so relations can be wired before the row is written.
//!
//! ## Core Models
//!
//! - `Account`: a registered person
//! - `Team`: a named group of accounts with aggregate scoring
//! - `Workout`: a suggested exercise template
//! - `Activity`: a historical exercise record owned by one account
//! - `LeaderboardEntry`: derived per-team total score

mod account;
mod activity;
mod leaderboard;
mod team;
mod workout;

pub use account::Account;
pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use workout::Workout;
