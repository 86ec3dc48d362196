// ABOUTME: Structured error types for database operations re-exported from octofit-core
// ABOUTME: Provides domain-specific errors with the failing operation and table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use octofit_core::errors::database::*;
