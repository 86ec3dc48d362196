// ABOUTME: Core types for the Octofit Tracker demo data loader
// ABOUTME: Foundation crate with error handling and the five fitness tracker record kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Octofit Core
//!
//! Foundation crate providing shared types for the Octofit Tracker demo data
//! loader. It has no knowledge of the storage engine; the main crate brings the
//! `SQLite` implementation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and database errors
//! - **models**: Accounts, teams, workouts, activities and leaderboard entries

/// Unified error handling system with standard error codes
pub mod errors;

/// Fitness tracker record models
pub mod models;
