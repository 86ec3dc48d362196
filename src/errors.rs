// ABOUTME: Unified error types re-exported from octofit-core
// ABOUTME: Gives binaries and tests a single import path for AppError and AppResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use octofit_core::errors::*;
